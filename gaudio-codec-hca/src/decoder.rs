//! The `Codec` implementation wiring header parsing, cipher, ATH, and the per-subframe decode
//! pipeline into one frame-at-a-time decoder (spec §4.2).

use crate::ath;
use crate::channel::{self, Channel, SAMPLES_PER_SUBFRAME, SUBFRAMES_PER_FRAME};
use crate::cipher::Cipher;
use crate::header::Header;
use gaudio_core::checksum::crc16;
use gaudio_core::codec::{Codec, CodecParams};
use gaudio_core::errors::{self, Result};
use gaudio_core::io::BitReaderLtr;
use gaudio_core::sample::write_interleaved;

/// `create()`-time configuration (spec §1's ambient "configuration" convention).
#[derive(Debug, Clone, Default)]
pub struct HcaOptions {
    /// The decryption keycode for `ciph` type 56 streams. Ignored for types 0/1.
    pub keycode: Option<u64>,
}

pub struct Hca {
    params: CodecParams,
    header: Header,
    cipher: Cipher,
    ath_curve: [u8; SAMPLES_PER_SUBFRAME],
    channels: Vec<Channel>,
    scratch: Vec<u8>,
}

impl Hca {
    pub fn create(header_bytes: &[u8], options: &HcaOptions) -> Result<Self> {
        let header = Header::parse(header_bytes)?;
        let cipher = Cipher::new(header.ciph_type, options.keycode.unwrap_or(0))?;
        let ath_curve = ath::build_curve(header.ath_type, header.sample_rate)?;
        let channels = channel::build_channels(&header)?;

        let samples_per_frame = (SUBFRAMES_PER_FRAME * SAMPLES_PER_SUBFRAME) as u32;
        let total_samples = (header.frame_count as u64)
            .saturating_mul(u64::from(samples_per_frame))
            .saturating_sub(u64::from(header.encoder_delay))
            .saturating_sub(u64::from(header.encoder_padding));
        let (loop_start, loop_end) = if header.loop_flag {
            (
                Some(u64::from(header.loop_start_frame) * u64::from(samples_per_frame) + u64::from(header.loop_start_delay)),
                Some(u64::from(header.loop_end_frame) * u64::from(samples_per_frame) + u64::from(header.loop_end_padding)),
            )
        }
        else {
            (None, None)
        };

        let params = CodecParams {
            sample_rate: header.sample_rate,
            channels: header.channels as u8,
            samples_per_frame,
            total_samples: Some(total_samples),
            loop_start,
            loop_end,
        };

        Ok(Hca { params, header, cipher, ath_curve, channels, scratch: Vec::new() })
    }

    /// Matches `clHCA_TestBlock`: decodes `frame` and scores how plausible the result looks,
    /// without needing the caller to know the keycode in advance. Returns a negative value on
    /// outright decode failure, 0 for a frame that decoded but came out entirely silent (or was
    /// itself all zero bytes before sync/crc), a clip count (≥2) when the decode produced
    /// excessive out-of-range samples (a strong sign the keycode is wrong), or 1 when the frame
    /// looks like a clean decode.
    pub fn test_block(&mut self, frame: &[u8]) -> i32 {
        if frame[2..frame.len() - 2].iter().all(|&b| b == 0) {
            return 0;
        }

        if self.decode_block(frame, true).is_err() {
            return -1;
        }

        let total = self.channels.len() * SUBFRAMES_PER_FRAME * SAMPLES_PER_SUBFRAME;
        let mut clips = 0i32;
        let mut blanks = 0i32;
        for ch in &self.channels {
            for subframe in &ch.wave {
                for &fsample in subframe {
                    if !(-1.0..=1.0).contains(&fsample) {
                        clips += 1;
                    }
                    else {
                        let psample = (fsample * 32768.0) as i32;
                        if psample == 0 || psample == -1 {
                            blanks += 1;
                        }
                    }
                }
            }
        }

        if clips == 1 {
            clips += 1;
        }
        if clips > 1 {
            return clips;
        }
        if blanks as usize == total {
            return 0;
        }
        1
    }

    fn decode_block(&mut self, frame: &[u8], _count_clipping: bool) -> Result<()> {
        if frame.len() < self.header.frame_size as usize {
            return errors::bad_params("HCA frame shorter than frame_size");
        }
        let frame = &frame[..self.header.frame_size as usize];

        let sync = u16::from_be_bytes([frame[0], frame[1]]);
        if sync != 0xFFFF {
            return errors::bad_sync("HCA frame did not start with 0xFFFF");
        }
        if crc16(frame) != 0 {
            return errors::bad_checksum("HCA frame checksum mismatch");
        }

        self.scratch.clear();
        self.scratch.extend_from_slice(frame);
        self.cipher.decrypt(&mut self.scratch);

        let mut br = BitReaderLtr::new(&self.scratch);
        br.read_bits(16)?; // sync, already verified

        let frame_acceptable_noise_level = br.read_bits(9)? as i32;
        let frame_evaluation_boundary = br.read_bits(7)? as i32;
        let packed_noise_level = (frame_acceptable_noise_level << 8) - frame_evaluation_boundary;

        for ch in &mut self.channels {
            channel::decode1_unpack_channel(ch, &mut br, self.header.hfr_group_count as usize, packed_noise_level, &self.ath_curve)?;
        }

        for subframe in 0..SUBFRAMES_PER_FRAME {
            for ch in &mut self.channels {
                channel::decode2_dequantize_coefficients(ch, &mut br)?;
            }

            for ch in &mut self.channels {
                channel::decode3_reconstruct_high_frequency(
                    ch,
                    self.header.hfr_group_count as usize,
                    self.header.bands_per_hfr_group as usize,
                    self.header.stereo_band_count as usize,
                    self.header.base_band_count as usize,
                    self.header.total_band_count as usize,
                );
            }

            for i in 0..self.channels.len().saturating_sub(1) {
                let (left, right) = self.channels.split_at_mut(i + 1);
                channel::decode4_apply_intensity_stereo(
                    &mut left[i],
                    &mut right[0],
                    subframe,
                    self.header.total_band_count as usize,
                    self.header.base_band_count as usize,
                    self.header.stereo_band_count as usize,
                );
            }

            for ch in &mut self.channels {
                channel::decoder5_run_imdct(ch, subframe);
            }
        }

        let bits_used = br.byte_position() as u32 * 8;
        if bits_used > self.header.frame_size * 8 - 16 {
            return errors::overrun("HCA frame decode overran its bit budget");
        }

        Ok(())
    }
}

impl Codec for Hca {
    fn params(&self) -> &CodecParams {
        &self.params
    }

    fn decode_frame(&mut self, frame: &[u8], out: &mut Vec<i16>) -> Result<()> {
        self.decode_block(frame, false)?;

        let base = out.len();
        out.resize(base + SUBFRAMES_PER_FRAME * SAMPLES_PER_SUBFRAME * self.channels.len(), 0);
        let channels = self.channels.len();
        for (c, ch) in self.channels.iter().enumerate() {
            for (subframe, wave) in ch.wave.iter().enumerate() {
                write_interleaved(
                    &mut out[base + subframe * SAMPLES_PER_SUBFRAME * channels..],
                    c,
                    channels,
                    wave,
                );
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        for ch in &mut self.channels {
            ch.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_header() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"HCA\0");
        buf.extend_from_slice(&0x0200u16.to_be_bytes());
        let header_size_pos = buf.len();
        buf.extend_from_slice(&0u16.to_be_bytes());

        buf.extend_from_slice(b"fmt\0");
        buf.push(1);
        buf.extend_from_slice(&44100u32.to_be_bytes()[1..]);
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());

        buf.extend_from_slice(b"comp");
        buf.extend_from_slice(&0x100u16.to_be_bytes());
        buf.push(1);
        buf.push(15);
        buf.push(1);
        buf.push(0);
        buf.push(64);
        buf.push(64);
        buf.push(0);
        buf.push(0);
        buf.push(0);
        buf.push(0);

        let header_size = (buf.len() + 2) as u16;
        buf[header_size_pos..header_size_pos + 2].copy_from_slice(&header_size.to_be_bytes());
        buf.extend_from_slice(&[0, 0]);
        let crc = crc16(&buf[..buf.len() - 2]);
        let len = buf.len();
        buf[len - 2..].copy_from_slice(&crc.to_be_bytes());
        buf
    }

    #[test]
    fn create_reports_expected_params() {
        let bytes = synthetic_header();
        let hca = Hca::create(&bytes, &HcaOptions::default()).unwrap();
        assert_eq!(hca.params().channels, 1);
        assert_eq!(hca.params().sample_rate, 44100);
        assert_eq!(hca.params().samples_per_frame, 1024);
    }

    #[test]
    fn rejects_a_frame_with_a_bad_sync_word() {
        let bytes = synthetic_header();
        let mut hca = Hca::create(&bytes, &HcaOptions::default()).unwrap();
        let frame = vec![0u8; 0x100];
        let mut out = Vec::new();
        assert!(hca.decode_frame(&frame, &mut out).is_err());
    }

    #[test]
    fn test_block_reports_silence_for_an_all_zero_payload() {
        let bytes = synthetic_header();
        let mut hca = Hca::create(&bytes, &HcaOptions::default()).unwrap();
        let frame = vec![0u8; 0x100];
        assert_eq!(hca.test_block(&frame), 0);
    }
}
