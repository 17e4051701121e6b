//! `.bigrp` header and per-subsong entry parsing (`bigrp_header_parse`/`bigrp_entry_parse`, plus
//! `init_vgmstream_bigrp`'s own field reads for the two non-audio codec values).

use gaudio_core::common::{le_u32, le_i32};
use gaudio_core::errors::{bad_params, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigrpCodec {
    /// Adaptive range decoder.
    Range,
    /// Arbitrary sidecar data, not audio (soundfont config etc). Surfaced as silence.
    Data,
    /// Standard MIDI, not decoded by this workspace. Surfaced as silence.
    Midi,
    /// Per-band DCT decoder.
    Dct,
}

impl BigrpCodec {
    fn from_u32(v: u32) -> Option<Self> {
        match v {
            0x00 => Some(BigrpCodec::Range),
            0x01 => Some(BigrpCodec::Data),
            0x02 => Some(BigrpCodec::Midi),
            0x03 => Some(BigrpCodec::Dct),
            _ => None,
        }
    }

    pub fn is_audio(self) -> bool {
        matches!(self, BigrpCodec::Range | BigrpCodec::Dct)
    }
}

pub struct BigrpHeader {
    pub head_size: u32,
    pub entry_size: u32,
    pub total_subsongs: u32,
}

impl BigrpHeader {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < 0x0c {
            return bad_params("bigrp header truncated");
        }
        let head_size = le_u32(&buf[0x00..0x04]);
        let entry_size = le_u32(&buf[0x04..0x08]);
        let total_subsongs = le_u32(&buf[0x08..0x0c]);

        if head_size != 0x0c && head_size != 0x10 {
            return bad_params("bigrp head_size must be 0x0c or 0x10");
        }
        if entry_size != 0x34 && entry_size != 0x40 {
            return bad_params("bigrp entry_size must be 0x34 or 0x40");
        }
        if head_size >= 0x10 {
            let dummy = le_u32(&buf[0x0c..0x10]);
            if dummy != 0 {
                return bad_params("bigrp reserved dword not zero");
            }
        }
        if total_subsongs == 0 {
            return bad_params("bigrp declares zero subsongs");
        }

        Ok(BigrpHeader { head_size, entry_size, total_subsongs })
    }

    pub fn entry_offset(&self, subsong: u32) -> u32 {
        self.head_size + self.entry_size * (subsong - 1)
    }
}

/// One subsong's audio parameters, or enough to report a silent dummy stream for non-audio codecs.
pub struct BigrpEntry {
    pub codec: BigrpCodec,
    pub sample_rate: u32,
    pub channels: u8,
    pub frame_codes: u32,
    pub loop_flag: bool,
    pub loop_start: i32,
    pub num_samples: i32,
    pub intro_samples: u32,
    pub intro_zsize: u32,
    pub intro_offset: u32,
    pub body_samples: u32,
    pub body_zsize: u32,
    pub body_offset: u32,
}

impl BigrpEntry {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < 0x08 {
            return bad_params("bigrp entry truncated");
        }
        let codec_raw = le_u32(&buf[0x08..0x0c]);
        let codec = match BigrpCodec::from_u32(codec_raw) {
            Some(c) => c,
            None => return bad_params("unrecognized bigrp entry codec"),
        };

        if !codec.is_audio() {
            // data/midi entries: caller surfaces these as a fixed-length silent dummy stream.
            return Ok(BigrpEntry {
                codec,
                sample_rate: 48000,
                channels: 1,
                frame_codes: 0,
                loop_flag: false,
                loop_start: 0,
                num_samples: 48000,
                intro_samples: 0,
                intro_zsize: 0,
                intro_offset: 0,
                body_samples: 0,
                body_zsize: 0,
                body_offset: 0,
            });
        }

        if buf.len() < 0x34 {
            return bad_params("bigrp audio entry truncated");
        }

        let sample_rate = le_u32(&buf[0x0c..0x10]);
        let channels = buf[0x10];
        let spf = buf[0x11];
        let loop_flag_raw = le_u32(&buf[0x14..0x18]);
        let frame_codes = le_u32(&buf[0x18..0x1c]);

        let intro_samples = le_u32(&buf[0x1c..0x20]);
        let intro_zsize = le_u32(&buf[0x20..0x24]);
        let intro_offset = le_u32(&buf[0x24..0x28]);
        let body_samples = le_u32(&buf[0x28..0x2c]);
        let body_zsize = le_u32(&buf[0x2c..0x30]);
        let body_offset = le_u32(&buf[0x30..0x34]);

        if !(2000..=48000).contains(&sample_rate) {
            return bad_params("bigrp sample rate out of range");
        }
        if channels < 1 || channels > 2 || spf != 16 {
            return bad_params("bigrp channel count or spf not supported");
        }
        if frame_codes != 0 && frame_codes != 0x64 {
            return bad_params("bigrp frame_codes must be 0 or 100");
        }
        if channels > 0 && frame_codes % channels as u32 != 0 {
            return bad_params("bigrp frame_codes not a multiple of channel count");
        }
        if loop_flag_raw > 1 {
            return bad_params("bigrp loop_flag not boolean");
        }
        if intro_samples == 0 && body_samples == 0 {
            return bad_params("bigrp entry has no samples at all");
        }
        if channels > 1 && codec == BigrpCodec::Range {
            return bad_params("bigrp range codec doesn't support stereo");
        }

        let loop_start = le_i32(&buf[0x1c..0x20]);
        let num_samples = loop_start + body_samples as i32;

        Ok(BigrpEntry {
            codec,
            sample_rate,
            channels,
            frame_codes,
            loop_flag: loop_flag_raw != 0,
            loop_start,
            num_samples,
            intro_samples,
            intro_zsize,
            intro_offset,
            body_samples,
            body_zsize,
            body_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(head_size: u32, entry_size: u32, total: u32) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&head_size.to_le_bytes());
        v.extend_from_slice(&entry_size.to_le_bytes());
        v.extend_from_slice(&total.to_le_bytes());
        if head_size >= 0x10 {
            v.extend_from_slice(&0u32.to_le_bytes());
        }
        v
    }

    #[test]
    fn parses_a_modern_header() {
        let buf = header_bytes(0x10, 0x40, 3);
        let hdr = BigrpHeader::parse(&buf).unwrap();
        assert_eq!(hdr.total_subsongs, 3);
        assert_eq!(hdr.entry_offset(2), 0x10 + 0x40);
    }

    #[test]
    fn rejects_an_unsupported_head_size() {
        let buf = header_bytes(0x20, 0x40, 1);
        assert!(BigrpHeader::parse(&buf).is_err());
    }

    #[test]
    fn midi_entry_reports_as_non_audio_silence() {
        let mut buf = vec![0u8; 0x34];
        buf[0x08..0x0c].copy_from_slice(&2u32.to_le_bytes());
        let entry = BigrpEntry::parse(&buf).unwrap();
        assert_eq!(entry.codec, BigrpCodec::Midi);
        assert!(!entry.codec.is_audio());
    }
}
