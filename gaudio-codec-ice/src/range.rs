//! The "range" decoder (internally `IceSoundCodecDecoderRange`): a zlib-wrapped stream of VBR
//! frames, each a 24-bit little-endian header (signed range min/max plus a quantized code width)
//! followed by `frame_codes` fixed-width codes. A code maps linearly onto `[range_min, range_max]`.
//! Stereo headers/codes alternate L, R.

use crate::zlib::inflate_all;
use gaudio_core::errors::{overrun, Result};

pub struct RangeDecoder {
    stream: Vec<u8>,
    pos: usize,
    channels: usize,
    frame_codes: usize,
    max_samples: usize,
    samples_done: usize,
    codes_left: usize,
    bitpos: u32,
    curr_byte: u8,
    range_min: [i16; 2],
    range_max: [i16; 2],
    range_bits: [u32; 2],
    range_mask: [u32; 2],
}

impl RangeDecoder {
    /// `channels` is 1 or 2, `frame_codes` is the number of sample-rows a header covers, and
    /// `max_samples` bounds the whole block (intro or body).
    pub fn new(block: &[u8], channels: usize, frame_codes: usize, max_samples: usize) -> Result<Self> {
        let stream = inflate_all(block)?;
        Ok(RangeDecoder {
            stream,
            pos: 0,
            channels,
            frame_codes,
            max_samples,
            samples_done: 0,
            codes_left: 0,
            bitpos: 0,
            curr_byte: 0,
            range_min: [0; 2],
            range_max: [0; 2],
            range_bits: [0; 2],
            range_mask: [0; 2],
        })
    }

    pub fn is_done(&self) -> bool {
        self.samples_done >= self.max_samples
    }

    fn load_byte(&mut self) -> Result<()> {
        match self.stream.get(self.pos) {
            Some(&b) => {
                self.curr_byte = b;
                self.pos += 1;
                Ok(())
            }
            None => overrun("range decoder ran out of data"),
        }
    }

    fn load_header(&mut self, ch: usize) -> Result<()> {
        self.load_byte()?;
        let mut header = self.curr_byte as u32;
        self.load_byte()?;
        header |= (self.curr_byte as u32) << 8;
        self.load_byte()?;
        header |= (self.curr_byte as u32) << 16;

        self.range_min[ch] = (((header >> 3) << 5) as u16) as i16;
        self.range_max[ch] = (((header >> 14) << 6) as u16) as i16;
        self.range_bits[ch] = (header & 7) + 1;
        self.range_mask[ch] = (1 << self.range_bits[ch]) - 1;
        Ok(())
    }

    fn get_sample(&mut self, ch: usize) -> Result<i16> {
        let mask = self.range_mask[ch];
        if self.bitpos == 0 {
            self.load_byte()?;
        }
        let mut code = ((self.curr_byte as u32) >> self.bitpos) & mask;

        let bits = self.range_bits[ch];
        if self.bitpos + bits > 8 {
            self.load_byte()?;
            code |= ((self.curr_byte as u32) << (8 - self.bitpos)) & mask;
            self.bitpos = (self.bitpos + bits) - 8;
        }
        else {
            self.bitpos = (self.bitpos + bits) & 7;
        }

        let range = self.range_max[ch] as i32 - self.range_min[ch] as i32;
        let delta = (code as i32 * range) / mask as i32;
        Ok((self.range_min[ch] as i32 + delta) as i16)
    }

    /// Decodes up to `max_done` interleaved sample rows into `out`, returning the number of rows
    /// decoded and whether the block has no samples left.
    pub fn decode(&mut self, out: &mut [i16], max_done: usize) -> Result<(usize, bool)> {
        let mut done = 0usize;

        while self.samples_done < self.max_samples {
            if self.codes_left == 0 {
                for ch in 0..self.channels {
                    self.load_header(ch)?;
                }
                self.codes_left = self.frame_codes.min(self.max_samples - self.samples_done);
                self.bitpos = 0;
            }

            while self.codes_left > 0 {
                for ch in 0..self.channels {
                    out[done * self.channels + ch] = self.get_sample(ch)?;
                }
                self.samples_done += 1;
                self.codes_left -= 1;
                done += 1;
                if done >= max_done {
                    return Ok((done, self.is_done()));
                }
            }
        }

        Ok((done, self.is_done()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zlib_wrap(raw: &[u8]) -> Vec<u8> {
        use std::io::Write;
        let mut enc = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(raw).unwrap();
        let zdata = enc.finish().unwrap();
        let mut out = (raw.len() as u32).to_le_bytes().to_vec();
        out.extend_from_slice(&zdata);
        out
    }

    #[test]
    fn mono_decodes_a_constant_sample_at_range_minimum() {
        // header: range_min=0, range_max=6000, bits=6 (packed little-endian 24-bit)
        // code 0 maps to range_min exactly.
        let range_min_bits: u32 = 0u32 >> 5; // range_min = (h>>3)<<5, so bits [3..13] hold range_min>>5
        let _ = range_min_bits;
        let bits = 6u32 - 1;
        // build frame_header so that range_min=0, range_max=6000 (0x1770 -> upper 10 bits 0x5DC<<6=0x1770... )
        // range_max = (h>>14)<<6, so h bits [14..23] = range_max >> 6 = 6000>>6 = 93 = 0x5D
        let header: u32 = (93u32 << 14) | (0u32 << 3) | bits;
        let mut raw = header.to_le_bytes()[..3].to_vec();
        raw.push(0x00); // one 6-bit code == 0, packed LSB first in one byte
        let block = zlib_wrap(&raw);

        let mut dec = RangeDecoder::new(&block, 1, 1, 1).unwrap();
        let mut out = [0i16; 1];
        let (done, is_done) = dec.decode(&mut out, 1).unwrap();
        assert_eq!(done, 1);
        assert!(is_done);
        assert_eq!(out[0], 0);
    }
}
