//! The shared codec contract (spec §4.1): `create`, `decode_frame`, `reset`.
//!
//! Modeled on `symphonia_core::codecs::audio::AudioDecoder`, but simplified: every codec in this
//! workspace emits the same fixed representation (interleaved 16-bit signed PCM) rather than
//! Symphonia's generic sample-format buffer, since none of these containers carry float or
//! >16-bit PCM payloads.

use crate::errors::Result;

/// Immutable facts about a codec instance, established once at `create()` and never mutated.
#[derive(Debug, Clone)]
pub struct CodecParams {
    pub sample_rate: u32,
    pub channels: u8,
    /// Number of interleaved PCM samples (per channel) produced by one `decode_frame` call.
    pub samples_per_frame: u32,
    /// Total number of samples in the stream, if known from the header.
    pub total_samples: Option<u64>,
    /// Loop points in samples, if the container declared any.
    pub loop_start: Option<u64>,
    pub loop_end: Option<u64>,
}

impl CodecParams {
    /// The one-line format description required by spec §6.
    pub fn describe(&self, format_name: &str, encoding: &str, layout: &str) -> String {
        let mut s = format!(
            "{}\nencoding: {}\nlayout: {}\nsample rate: {} Hz\nchannels: {}",
            format_name, encoding, layout, self.sample_rate, self.channels
        );
        if let Some(total) = self.total_samples {
            let secs = total as f64 / self.sample_rate as f64;
            s.push_str(&format!("\nstream total samples: {} ({:.3}s)", total, secs));
        }
        if let (Some(start), Some(_end)) = (self.loop_start, self.loop_end) {
            let start_secs = start as f64 / self.sample_rate as f64;
            s.push_str(&format!("\nloop start: {} samples ({:.3}s)", start, start_secs));
        }
        if let Some(end) = self.loop_end {
            s.push_str(&format!("\nloop end: {} samples", end));
        }
        s
    }
}

/// Common behavior every codec decoder implements.
///
/// `decode_frame` consumes exactly one frame of compressed bytes and appends
/// `samples_per_frame * channels` interleaved `i16` samples to `out`. `reset` clears any
/// overlap/history state so the next `decode_frame` call starts a fresh, non-continuous frame
/// (used after a seek).
pub trait Codec {
    fn params(&self) -> &CodecParams;

    fn decode_frame(&mut self, frame: &[u8], out: &mut Vec<i16>) -> Result<()>;

    fn reset(&mut self);
}
