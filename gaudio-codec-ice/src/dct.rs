//! The "dct" decoder (internally `IceSoundCodecDecoderDCT`): one codebook per band (zlibbed
//! 4-bit-nibble quantized-bit-width streams), a raw bitstream of variable-width signed codes that
//! delta-decode against the previous two 16-sample groups, and a hardcoded 16-point DCT-III
//! synthesis. Stereo uses mid-side: `(L+R, L-R)`.

use crate::zlib::inflate_all;
use crate::tables::{MAX_BANDS, MAX_PREV, TRANSFORM_COEFS, TRANSFORM_SCALES, TRANSFORM_STEPS};
use gaudio_core::common::le_u32;
use gaudio_core::errors::{bad_params, Result};

const MAX_CHANNELS: usize = 2;
const CODEINFO_SIZE: usize = 0x114;

/// Parsed `0x114`-byte header embedded at the start of a DCT block.
pub struct CodeInfo {
    pub init_scale: u8,
    pub bands: usize,
    pub channels: usize,
    pub max_samples: usize,
    pub cbk_offset: [[u32; MAX_BANDS]; MAX_CHANNELS],
    pub cbk_size: [[u32; MAX_BANDS]; MAX_CHANNELS],
    pub data_start: u32,
    pub data_size: u32,
}

impl CodeInfo {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < CODEINFO_SIZE {
            return bad_params("dct codeinfo header truncated");
        }

        let table_size = le_u32(&buf[0x00..0x04]);
        let init_scale = buf[0x04];
        let bands = buf[0x05] as usize;
        let channels = buf[0x06] as usize;
        let unused = buf[0x07];

        let max_samples = le_u32(&buf[0x08..0x0c]) as usize;

        let mut cbk_offset = [[0u32; MAX_BANDS]; MAX_CHANNELS];
        let mut cbk_size = [[0u32; MAX_BANDS]; MAX_CHANNELS];
        let mut pos = 0x0c;
        for ch in 0..MAX_CHANNELS {
            for i in 0..MAX_BANDS {
                cbk_offset[ch][i] = le_u32(&buf[pos..pos + 4]);
                pos += 4;
            }
        }
        for ch in 0..MAX_CHANNELS {
            for i in 0..MAX_BANDS {
                cbk_size[ch][i] = le_u32(&buf[pos..pos + 4]);
                pos += 4;
            }
        }

        let data_start = le_u32(&buf[0x10c..0x110]);
        let data_size = le_u32(&buf[0x110..0x114]);

        if table_size as usize > CODEINFO_SIZE {
            return bad_params("dct codeinfo table_size too large");
        }
        if bands < 1 || bands > MAX_BANDS {
            return bad_params("dct codeinfo band count out of range");
        }
        if channels < 1 || channels > MAX_CHANNELS {
            return bad_params("dct codeinfo channel count out of range");
        }
        if unused != 0 {
            return bad_params("dct codeinfo reserved byte not zero");
        }
        if buf.len() < data_start as usize + data_size as usize {
            return bad_params("dct codeinfo data range exceeds block");
        }

        Ok(CodeInfo { init_scale, bands, channels, max_samples, cbk_offset, cbk_size, data_start, data_size })
    }
}

/// Reads `bits` (0..=32) least-significant-bit first, starting at `*bitpos` within `buf`. Mirrors
/// the reference decoder's pointer-cast bit reader, but reads byte-by-byte with bounds checks.
fn bits_get(buf: &[u8], bitpos: &mut usize, bits: u32) -> u32 {
    let max_bits = buf.len() * 8;
    if *bitpos + bits as usize > max_bits {
        return 0;
    }

    let pos = *bitpos >> 3;
    let shift = (*bitpos & 7) as u32;
    let byte = |i: usize| -> u64 { buf.get(i).copied().unwrap_or(0) as u64 };

    let mut code: u64 = byte(pos) >> shift;
    if bits + shift > 8 {
        code |= byte(pos + 1) << (8 - shift);
        if bits + shift > 16 {
            code |= byte(pos + 2) << (16 - shift);
            if bits + shift > 24 {
                code |= byte(pos + 3) << (24 - shift);
                if bits + shift > 32 {
                    code |= byte(pos + 4) << (32 - shift);
                }
            }
        }
    }

    *bitpos += bits as usize;
    let mask: u64 = if bits == 0 { 0 } else { (1u64 << bits) - 1 };
    (code & mask) as u32
}

struct Codebook {
    data: Vec<u8>,
    bitpos: usize,
}

impl Codebook {
    fn new(block: &[u8]) -> Result<Self> {
        Ok(Codebook { data: inflate_all(block)?, bitpos: 0 })
    }

    fn get_qbits(&mut self) -> u8 {
        bits_get(&self.data, &mut self.bitpos, 4) as u8
    }
}

pub struct DctDecoder {
    info: CodeInfo,
    channels_count: usize,
    transform: [[f32; MAX_BANDS]; 8],
    codebooks: Vec<Vec<Codebook>>,
    data: Vec<u8>,
    data_bitpos: usize,
    spectra: Vec<[[i16; MAX_BANDS]; MAX_PREV]>,
    spectra_curr: usize,
    samples_done: usize,
    sbuf_tmp: Vec<i16>,
}

impl DctDecoder {
    pub fn new(block: &[u8]) -> Result<Self> {
        let info = CodeInfo::parse(block)?;

        let scale = info.init_scale as f32;
        let dct_coefs: Vec<f32> = TRANSFORM_COEFS.iter().map(|c| c * scale).collect();

        let mut transform = [[0f32; MAX_BANDS]; 8];
        for i in 0..MAX_BANDS {
            let steps = TRANSFORM_STEPS[i];
            let mut pos = i;
            for step in 0..steps {
                let quadrant = (pos >> 4) & 3;
                let coef = match quadrant {
                    1 => -dct_coefs[16 - (pos & 0xF)],
                    2 => -dct_coefs[pos & 0xF],
                    3 => dct_coefs[16 - (pos & 0xF)],
                    _ => dct_coefs[pos & 0xF],
                };
                pos += 2 * i;
                transform[step][i] = TRANSFORM_SCALES[i] * coef;
            }
        }

        let mut codebooks = Vec::with_capacity(info.channels);
        for ch in 0..info.channels {
            let mut bands = Vec::with_capacity(info.bands);
            for band in 0..info.bands {
                let off = info.cbk_offset[ch][band] as usize;
                let size = info.cbk_size[ch][band] as usize;
                bands.push(Codebook::new(&block[off..off + size])?);
            }
            codebooks.push(bands);
        }

        let data_start = info.data_start as usize;
        let data_size = info.data_size as usize;
        let data = block[data_start..data_start + data_size].to_vec();

        Ok(DctDecoder {
            channels_count: info.channels,
            info,
            transform,
            codebooks,
            data,
            data_bitpos: 0,
            spectra: vec![[[0i16; MAX_BANDS]; MAX_PREV]; MAX_CHANNELS],
            spectra_curr: 0,
            samples_done: 0,
            sbuf_tmp: vec![0i16; MAX_BANDS * MAX_CHANNELS],
        })
    }

    pub fn is_done(&self) -> bool {
        self.samples_done >= self.info.max_samples
    }

    pub fn channels(&self) -> usize {
        self.channels_count
    }

    /// Reads one signed code of `qbits` width (`qbits == 0` means a single sign bit, `0`/`-1`).
    fn get_code(&mut self, qbits: u8) -> i32 {
        if qbits == 0 {
            let bit = bits_get(&self.data, &mut self.data_bitpos, 1);
            return if bit != 0 { -1 } else { 0 };
        }
        let raw = bits_get(&self.data, &mut self.data_bitpos, qbits as u32) as i32;
        if raw < (1 << (qbits - 1)) {
            raw
        }
        else {
            raw - (1 << qbits)
        }
    }

    fn dequantize(&mut self, channel: usize, pos: usize) {
        let bands = self.info.bands;
        let prev1 = (pos + MAX_PREV - 1) % MAX_PREV;
        let prev2 = (pos + MAX_PREV - 2) % MAX_PREV;

        for band in 0..bands {
            let qbits = self.codebooks[channel][band].get_qbits();
            let code = self.get_code(qbits);
            let p1 = self.spectra[channel][prev1][band] as i32;
            let p2 = self.spectra[channel][prev2][band] as i32;
            self.spectra[channel][pos][band] = (code + 2 * p1 - p2) as i16;
        }
    }

    /// 16-point hardcoded DCT-III synthesis, writing `channels_count`-interleaved samples for this
    /// channel into `sbuf_tmp`.
    fn transform_block(&self, sbuf_tmp: &mut [i16], channel: usize, pos: usize) {
        let bands = self.info.bands;
        let channels = self.channels_count;
        let mut fbuf = [0f32; MAX_BANDS];

        for band in 0..bands {
            let coef = self.spectra[channel][pos][band] as f32;

            match band {
                0 => {
                    let f = self.transform[0][band] * coef;
                    fbuf = [f; MAX_BANDS];
                }
                1 | 3 | 5 | 7 | 9 | 11 | 13 | 15 => {
                    for step in 0..8 {
                        let f = self.transform[step][band] * coef;
                        fbuf[step] += f;
                        fbuf[15 - step] -= f;
                    }
                }
                2 | 6 | 10 | 14 => {
                    for step in 0..4 {
                        let f = self.transform[step][band] * coef;
                        fbuf[step] += f;
                        fbuf[7 - step] -= f;
                        fbuf[8 + step] -= f;
                        fbuf[15 - step] += f;
                    }
                }
                4 | 12 => {
                    for step in 0..2 {
                        let f = self.transform[step][band] * coef;
                        fbuf[step] += f;
                        fbuf[3 - step] -= f;
                        fbuf[4 + step] -= f;
                        fbuf[7 - step] += f;
                        fbuf[8 + step] += f;
                        fbuf[11 - step] -= f;
                        fbuf[12 + step] -= f;
                        fbuf[15 - step] += f;
                    }
                }
                8 => {
                    let f = self.transform[0][band] * coef;
                    for (i, v) in fbuf.iter_mut().enumerate() {
                        let sign = if i % 4 == 0 || i % 4 == 3 { 1.0 } else { -1.0 };
                        *v += sign * f;
                    }
                }
                _ => {}
            }
        }

        for (i, sample) in fbuf.iter().enumerate() {
            sbuf_tmp[channel + channels * i] = sample.round() as i16;
        }
    }

    fn ms_stereo(&self, sbuf_tmp: &[i16], out: &mut [i16]) {
        let channels = self.channels_count;
        for i in 0..MAX_BANDS {
            let l = sbuf_tmp[channels * i] as i32;
            let r = sbuf_tmp[1 + channels * i] as i32;
            out[channels * i] = (l + r) as i16;
            out[1 + channels * i] = (l - r) as i16;
        }
    }

    /// Decodes up to `max_done` interleaved sample rows into `out`, returning rows decoded and
    /// whether the block is finished. Internally always synthesizes 16 samples at a time.
    pub fn decode(&mut self, out: &mut [i16], max_done: usize) -> Result<(usize, bool)> {
        let channels = self.channels_count;
        let mut done = 0usize;
        let mut samples_left = max_done.min(self.info.max_samples.saturating_sub(self.samples_done));

        while self.samples_done < self.info.max_samples {
            if samples_left == 0 {
                return Ok((done, self.is_done()));
            }

            if self.samples_done & 0xF == 0 {
                let pos = self.spectra_curr;
                let mut sbuf_tmp = vec![0i16; MAX_BANDS * channels];
                for ch in 0..channels {
                    self.dequantize(ch, pos);
                    self.transform_block(&mut sbuf_tmp, ch, pos);
                }
                self.spectra_curr = (self.spectra_curr + 1) % MAX_PREV;

                if channels == 2 {
                    self.ms_stereo(&sbuf_tmp, &mut self.sbuf_tmp);
                }
                else {
                    self.sbuf_tmp.copy_from_slice(&sbuf_tmp);
                }
            }

            let sample_start = self.samples_done & 0xF;
            let mut samples_copied = 16 - sample_start;
            if samples_copied > samples_left {
                samples_copied = samples_left;
            }

            let src = &self.sbuf_tmp[sample_start * channels..(sample_start + samples_copied) * channels];
            out[done * channels..done * channels + src.len()].copy_from_slice(src);

            self.samples_done += samples_copied;
            samples_left -= samples_copied;
            done += samples_copied;
        }

        Ok((done, self.is_done()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codeinfo_rejects_a_truncated_header() {
        let buf = vec![0u8; 0x50];
        assert!(CodeInfo::parse(&buf).is_err());
    }

    #[test]
    fn codeinfo_rejects_an_out_of_range_band_count() {
        let mut buf = vec![0u8; CODEINFO_SIZE];
        buf[0x05] = 0; // bands = 0, invalid
        buf[0x06] = 1; // channels
        assert!(CodeInfo::parse(&buf).is_err());
    }

    #[test]
    fn bits_get_reads_lsb_first_across_a_byte_boundary() {
        let buf = [0b1011_0001u8, 0b0000_0001u8];
        let mut pos = 0usize;
        assert_eq!(bits_get(&buf, &mut pos, 4), 0b0001);
        assert_eq!(bits_get(&buf, &mut pos, 8), 0b1_1011);
    }

    #[test]
    fn band_zero_transform_fills_every_output_sample() {
        let mut buf = vec![0u8; CODEINFO_SIZE];
        buf[0x04] = 1; // init_scale
        buf[0x05] = 1; // bands
        buf[0x06] = 1; // channels
        // data_start/data_size left at 0, table fits within the 0x114 header itself.
        let decoder = DctDecoder {
            info: CodeInfo::parse(&buf).unwrap(),
            channels_count: 1,
            transform: [[2.0; MAX_BANDS]; 8],
            codebooks: vec![],
            data: vec![],
            data_bitpos: 0,
            spectra: vec![[[0i16; MAX_BANDS]; MAX_PREV]; MAX_CHANNELS],
            spectra_curr: 0,
            samples_done: 0,
            sbuf_tmp: vec![0i16; MAX_BANDS],
        };
        let mut sbuf = vec![0i16; MAX_BANDS];
        let mut spectra = decoder.spectra.clone();
        spectra[0][0][0] = 3;
        let decoder2 = DctDecoder { spectra, ..decoder };
        decoder2.transform_block(&mut sbuf, 0, 0);
        assert!(sbuf.iter().all(|&s| s == 6));
    }
}
