//! Standard Nintendo GameCube/Wii ADPCM (`ngc_dsp_std.c`'s `struct dsp_header`).
//!
//! The 96-byte header (only the first 0x4e bytes carry fields; the rest is reserved padding) is
//! followed by the ADPCM data: 8-byte frames, one header byte (`(predictor << 4) | scale_exp`)
//! followed by 14 signed 4-bit samples. Multichannel streams repeat one header per channel and
//! interleave channel data at some block spacing, exactly as `dsp_load_header_endian` does.

use gaudio_core::common::{be_u16, be_u32};
use gaudio_core::errors::{bad_params, Result};

pub const HEADER_SIZE: usize = 0x60;
const HEADER_FIELDS_SIZE: usize = 0x4e;
const SAMPLES_PER_FRAME: usize = 14;
const FRAME_SIZE: usize = 8;

#[derive(Debug, Clone)]
pub struct DspHeader {
    pub sample_count: u32,
    pub nibble_count: u32,
    pub sample_rate: u32,
    pub loop_flag: bool,
    pub format: u16,
    pub loop_start_offset: u32,
    pub loop_end_offset: u32,
    pub coef: [[i32; 2]; 8],
    pub gain: u16,
    pub initial_ps: u8,
    pub initial_hist1: i16,
    pub initial_hist2: i16,
    pub loop_ps: u8,
    pub loop_hist1: i16,
    pub loop_hist2: i16,
}

impl DspHeader {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_FIELDS_SIZE {
            return bad_params("dsp header truncated");
        }

        let sample_count = be_u32(&buf[0x00..0x04]);
        let nibble_count = be_u32(&buf[0x04..0x08]);
        let sample_rate = be_u32(&buf[0x08..0x0c]);
        let loop_flag = be_u16(&buf[0x0c..0x0e]) != 0;
        let format = be_u16(&buf[0x0e..0x10]);
        let loop_start_offset = be_u32(&buf[0x10..0x14]);
        let loop_end_offset = be_u32(&buf[0x14..0x18]);

        if format != 0 {
            return bad_params("dsp format must be 0 (adpcm)");
        }

        let mut coef = [[0i32; 2]; 8];
        for (i, pair) in coef.iter_mut().enumerate() {
            let off = 0x1c + i * 4;
            pair[0] = be_u16(&buf[off..off + 2]) as i16 as i32;
            pair[1] = be_u16(&buf[off + 2..off + 4]) as i16 as i32;
        }

        let gain = be_u16(&buf[0x3c..0x3e]);
        let initial_ps = be_u16(&buf[0x3e..0x40]) as u8;
        let initial_hist1 = be_u16(&buf[0x40..0x42]) as i16;
        let initial_hist2 = be_u16(&buf[0x42..0x44]) as i16;
        let loop_ps = be_u16(&buf[0x44..0x46]) as u8;
        let loop_hist1 = be_u16(&buf[0x46..0x48]) as i16;
        let loop_hist2 = be_u16(&buf[0x48..0x4a]) as i16;

        Ok(DspHeader {
            sample_count,
            nibble_count,
            sample_rate,
            loop_flag,
            format,
            loop_start_offset,
            loop_end_offset,
            coef,
            gain,
            initial_ps,
            initial_hist1,
            initial_hist2,
            loop_ps,
            loop_hist1,
            loop_hist2,
        })
    }
}

fn signed_nibble(n: u8) -> i32 {
    if n & 0x08 != 0 {
        n as i32 - 0x10
    }
    else {
        n as i32
    }
}

/// One channel's decode state: coefficient table plus the running predictor history.
pub struct DspChannel<'a> {
    header: DspHeader,
    data: &'a [u8],
    hist1: i32,
    hist2: i32,
    pos: usize,
}

impl<'a> DspChannel<'a> {
    pub fn new(header: DspHeader, data: &'a [u8]) -> Self {
        let hist1 = header.initial_hist1 as i32;
        let hist2 = header.initial_hist2 as i32;
        DspChannel { header, data, hist1, hist2, pos: 0 }
    }

    pub fn num_samples(&self) -> usize {
        self.header.sample_count as usize
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.num_samples()
    }

    /// Decodes up to `max_samples` samples, appending them to `out`; returns the number produced.
    pub fn decode(&mut self, out: &mut Vec<i16>, max_samples: usize) -> Result<usize> {
        let mut done = 0;
        while done < max_samples && self.pos < self.num_samples() {
            let frame_index = self.pos / SAMPLES_PER_FRAME;
            let frame_offset = frame_index * FRAME_SIZE;
            if frame_offset >= self.data.len() {
                break;
            }

            let ps = self.data[frame_offset];
            let predictor = ((ps >> 4) & 0x07) as usize;
            let scale = 1i32 << (ps & 0x0f);
            let coef1 = self.header.coef[predictor][0];
            let coef2 = self.header.coef[predictor][1];

            let sample_in_frame = self.pos % SAMPLES_PER_FRAME;
            let nibble_offset = frame_offset + 1 + sample_in_frame / 2;
            if nibble_offset >= self.data.len() {
                break;
            }
            let byte = self.data[nibble_offset];
            let nibble = if sample_in_frame % 2 == 0 { byte >> 4 } else { byte & 0x0f };

            let delta = signed_nibble(nibble) * scale;
            let predicted = (coef1 * self.hist1 + coef2 * self.hist2) >> 11;
            let sample = (delta + predicted).clamp(i16::MIN as i32, i16::MAX as i32);

            self.hist2 = self.hist1;
            self.hist1 = sample;
            out.push(sample as i16);

            self.pos += 1;
            done += 1;
        }
        Ok(done)
    }
}

/// A multichannel DSP stream: one header + data slice per channel.
pub struct DspStream<'a> {
    pub sample_rate: u32,
    pub loop_flag: bool,
    channels: Vec<DspChannel<'a>>,
}

impl<'a> DspStream<'a> {
    /// `spacing` is the byte distance between successive channels' header blocks, as
    /// `dsp_load_header_endian` takes it; `data` is the full channel-interleaved audio region.
    pub fn parse(buf: &'a [u8], data: &'a [u8], channel_count: usize, spacing: usize) -> Result<Self> {
        if channel_count == 0 {
            return bad_params("dsp channel count must be nonzero");
        }

        let mut headers = Vec::with_capacity(channel_count);
        for i in 0..channel_count {
            let off = i * spacing;
            if off + HEADER_FIELDS_SIZE > buf.len() {
                return bad_params("dsp multichannel header table truncated");
            }
            headers.push(DspHeader::parse(&buf[off..])?);
        }

        let sample_rate = headers[0].sample_rate;
        let loop_flag = headers[0].loop_flag;
        let data_per_channel = data.len() / channel_count;

        let channels = headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                let start = i * data_per_channel;
                let end = start + data_per_channel;
                DspChannel::new(h, &data[start..end])
            })
            .collect();

        Ok(DspStream { sample_rate, loop_flag, channels })
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn num_samples(&self) -> usize {
        self.channels.first().map(|c| c.num_samples()).unwrap_or(0)
    }

    /// Decodes up to `max_samples` interleaved sample rows, replacing `out`'s contents.
    pub fn decode(&mut self, out: &mut Vec<i16>, max_samples: usize) -> Result<usize> {
        out.clear();
        let channels = self.channels.len();
        let mut per_channel: Vec<Vec<i16>> = vec![Vec::new(); channels];
        let mut done = 0;
        for (ch, buf) in self.channels.iter_mut().zip(per_channel.iter_mut()) {
            done = ch.decode(buf, max_samples)?;
        }
        for row in 0..done {
            for ch_buf in &per_channel {
                out.push(ch_buf[row]);
            }
        }
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(sample_count: u32, coef0: (i16, i16)) -> Vec<u8> {
        let mut v = vec![0u8; HEADER_FIELDS_SIZE];
        v[0x00..0x04].copy_from_slice(&sample_count.to_be_bytes());
        v[0x1c..0x1e].copy_from_slice(&coef0.0.to_be_bytes());
        v[0x1e..0x20].copy_from_slice(&coef0.1.to_be_bytes());
        v
    }

    #[test]
    fn decodes_a_silent_frame_to_zero() {
        let header = DspHeader::parse(&header_bytes(14, (2048, 0))).unwrap();
        // one frame: header byte ps=0x00 (predictor 0, scale 2^0=1), all-zero nibbles.
        let data = [0u8; 8];
        let mut ch = DspChannel::new(header, &data);
        let mut out = Vec::new();
        let done = ch.decode(&mut out, 14).unwrap();
        assert_eq!(done, 14);
        assert!(out.iter().all(|&s| s == 0));
    }

    #[test]
    fn rejects_a_nonzero_format_field() {
        let mut buf = header_bytes(1, (0, 0));
        buf[0x0e..0x10].copy_from_slice(&1u16.to_be_bytes());
        assert!(DspHeader::parse(&buf).is_err());
    }
}
