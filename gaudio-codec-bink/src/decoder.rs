//! Per-decoder (mono or stereo sub-stream) state and the top-level `Codec` wiring. A Bink Audio
//! stream with more than 2 channels is split into `ceil(channels/2)` independent mono/stereo
//! sub-decoders, each reading its own sub-frame out of the same packet back to back, 32-bit
//! aligned (spec §4.3's "multichannel packets contain frames serialized back-to-back").

use crate::tables::CUTOFF_FREQUENCIES;
use crate::unpack::unpack_channel;
use gaudio_core::codec::{Codec, CodecParams};
use gaudio_core::dsp::idct3;
use gaudio_core::errors::Result;
use gaudio_core::io::BitReaderRtl;
use gaudio_core::sample::write_interleaved;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinkMode {
    /// Bink 1.1 container (BCF), DCT transform only (RDFT is out of scope, see DESIGN.md).
    Bcf,
    /// Bink 2 (UEBA), always DCT with the Binka2 coefficient packing.
    Ueba,
}

#[derive(Debug, Clone)]
pub struct BinkOptions {
    pub sample_rate: u32,
    pub channels: u8,
    pub mode: BinkMode,
}

struct SubDecoder {
    frame_channels: usize,
    frame_samples: usize,
    overlap_samples: usize,
    band_count: usize,
    band_thresholds: Vec<u32>,
    scale: f32,
    is_first_frame: bool,
    is_binka2: bool,
    coefs: Vec<Vec<f32>>,
    overlap: Vec<Vec<f32>>,
}

impl SubDecoder {
    fn new(sample_rate: u32, frame_channels: usize, is_binka2: bool) -> Self {
        let frame_samples = if sample_rate < 22050 {
            512
        }
        else if sample_rate < 44100 {
            1024
        }
        else {
            2048
        };
        let frame_samples_half = frame_samples / 2;
        let sample_rate_half = (sample_rate + 1) / 2;

        let mut band_count = 0usize;
        while band_count < CUTOFF_FREQUENCIES.len() - 1 {
            if CUTOFF_FREQUENCIES[band_count] >= sample_rate_half {
                break;
            }
            band_count += 1;
        }

        let mut band_thresholds = vec![0u32; band_count + 1];
        for (i, t) in band_thresholds.iter_mut().enumerate().take(band_count) {
            let mut limit = frame_samples_half as u32 * CUTOFF_FREQUENCIES[i] / sample_rate_half;
            if limit == 0 {
                limit = 1;
            }
            *t = limit;
        }
        band_thresholds[band_count] = frame_samples_half as u32;

        SubDecoder {
            frame_channels,
            frame_samples,
            overlap_samples: frame_samples / 16,
            band_count,
            band_thresholds,
            scale: 2.0 / (frame_samples as f32).sqrt(),
            is_first_frame: true,
            is_binka2,
            coefs: vec![vec![0.0; frame_samples]; frame_channels],
            overlap: vec![vec![0.0; frame_samples / 16]; frame_channels],
        }
    }

    fn output_samples(&self) -> usize {
        self.frame_samples - self.overlap_samples
    }

    /// Decodes one sub-frame out of `data`, returning the number of bytes consumed (32-bit
    /// aligned).
    fn decode(&mut self, data: &[u8]) -> Result<usize> {
        let mut br = BitReaderRtl::new(data);
        br.read_bits(2)?; // reserved DCT-mode bits

        for ch in 0..self.frame_channels {
            unpack_channel(&mut self.coefs[ch], self.band_count, &mut br, &self.band_thresholds, self.is_binka2)?;
            idct3(&mut self.coefs[ch]);
            for s in self.coefs[ch].iter_mut() {
                *s *= self.scale;
            }

            let overlap_bits = if self.is_first_frame { 0 } else { self.overlap_samples };
            for i in 0..overlap_bits {
                let prev = self.overlap[ch][i];
                self.coefs[ch][i] = prev + (i as f32 * (self.coefs[ch][i] - prev)) / self.overlap_samples as f32;
            }
            let tail_start = self.output_samples();
            self.overlap[ch].copy_from_slice(&self.coefs[ch][tail_start..]);
        }
        self.is_first_frame = false;

        br.align_to(32)?;
        Ok(br.byte_position())
    }
}

pub struct Bink {
    params: CodecParams,
    channels: usize,
    subdecoders: Vec<SubDecoder>,
}

impl Bink {
    pub fn create(options: &BinkOptions) -> Result<Self> {
        let channels = options.channels as usize;
        let is_binka2 = options.mode == BinkMode::Ueba;

        let mut subdecoders = Vec::new();
        let mut remaining = channels;
        while remaining > 0 {
            let sub_channels = remaining.min(2);
            subdecoders.push(SubDecoder::new(options.sample_rate, sub_channels, is_binka2));
            remaining -= sub_channels;
        }

        let samples_per_frame = subdecoders[0].output_samples() as u32;
        let params = CodecParams {
            sample_rate: options.sample_rate,
            channels: options.channels,
            samples_per_frame,
            total_samples: None,
            loop_start: None,
            loop_end: None,
        };

        Ok(Bink { params, channels, subdecoders })
    }
}

impl Codec for Bink {
    fn params(&self) -> &CodecParams {
        &self.params
    }

    fn decode_frame(&mut self, frame: &[u8], out: &mut Vec<i16>) -> Result<()> {
        let mut offset = 0usize;
        for sub in &mut self.subdecoders {
            let consumed = sub.decode(&frame[offset..])?;
            offset += consumed;
        }

        let output_samples = self.subdecoders[0].output_samples();
        let base = out.len();
        out.resize(base + output_samples * self.channels, 0);

        let mut dst_channel = 0usize;
        for sub in &self.subdecoders {
            for ch in 0..sub.frame_channels {
                write_interleaved(&mut out[base..], dst_channel, self.channels, &sub.coefs[ch][..output_samples]);
                dst_channel += 1;
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        for sub in &mut self.subdecoders {
            sub.is_first_frame = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_low_rate_uses_512_sample_frames() {
        let opts = BinkOptions { sample_rate: 16000, channels: 1, mode: BinkMode::Ueba };
        let bink = Bink::create(&opts).unwrap();
        assert_eq!(bink.subdecoders[0].frame_samples, 512);
        assert_eq!(bink.params().samples_per_frame, 480);
    }

    #[test]
    fn stereo_48k_splits_into_one_subdecoder() {
        let opts = BinkOptions { sample_rate: 48000, channels: 2, mode: BinkMode::Ueba };
        let bink = Bink::create(&opts).unwrap();
        assert_eq!(bink.subdecoders.len(), 1);
        assert_eq!(bink.subdecoders[0].frame_samples, 2048);
    }

    #[test]
    fn five_point_one_splits_into_three_subdecoders() {
        let opts = BinkOptions { sample_rate: 48000, channels: 6, mode: BinkMode::Ueba };
        let bink = Bink::create(&opts).unwrap();
        assert_eq!(bink.subdecoders.len(), 3);
    }
}
