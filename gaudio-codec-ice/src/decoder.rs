//! Top-level per-subsong decoder, choosing between the range and DCT codecs and stepping through
//! a subsong's intro/body blocks the way `icesnd_decode` does.
//!
//! This codec family doesn't decode fixed-size frames: each block is a continuous bitstream that
//! yields an arbitrary run of sample rows per call, so it doesn't implement the workspace-wide
//! `Codec` trait (built around one call per fixed-size frame). Instead `gaudio-format-bigrp` drives
//! this decoder directly, handing it successive intro/body blocks exactly as `icesnd_decode`'s loop
//! does, one block "setup" followed by as many `decode` calls as needed to drain it.

use crate::dct::DctDecoder;
use crate::range::RangeDecoder;
use gaudio_core::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IceCodec {
    Range,
    Dct,
}

enum Inner {
    Range(RangeDecoder),
    Dct(DctDecoder),
}

/// Drains one block (intro or body) of a subsong.
pub struct IceBlockDecoder {
    inner: Inner,
    channels: usize,
}

impl IceBlockDecoder {
    pub fn new_range(block: &[u8], channels: usize, frame_codes: usize, max_samples: usize) -> Result<Self> {
        Ok(IceBlockDecoder {
            inner: Inner::Range(RangeDecoder::new(block, channels, frame_codes, max_samples)?),
            channels,
        })
    }

    pub fn new_dct(block: &[u8]) -> Result<Self> {
        let dct = DctDecoder::new(block)?;
        let channels = dct.channels();
        Ok(IceBlockDecoder { inner: Inner::Dct(dct), channels })
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn is_done(&self) -> bool {
        match &self.inner {
            Inner::Range(r) => r.is_done(),
            Inner::Dct(d) => d.is_done(),
        }
    }

    /// Decodes up to `max_done` interleaved sample rows, returning rows decoded and whether the
    /// block has been fully drained.
    pub fn decode(&mut self, out: &mut [i16], max_done: usize) -> Result<(usize, bool)> {
        match &mut self.inner {
            Inner::Range(r) => r.decode(out, max_done),
            Inner::Dct(d) => d.decode(out, max_done),
        }
    }
}
