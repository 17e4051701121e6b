//! Per-channel decode state and the five-stage subframe decode pipeline (spec §4.2):
//! scalefactor unpack, dequantize, high-frequency reconstruction, intensity stereo, IMDCT.

use crate::header::Header;
use crate::tables::{
    DCT_COS_TABLES, DCT_SIN_TABLES, DEQUANTIZER_SCALING_TABLE, IMDCT_WINDOW, INTENSITY_RATIO_TABLE,
    QUANTIZED_SPECTRUM_BITS, QUANTIZED_SPECTRUM_MAX_BITS, QUANTIZED_SPECTRUM_VALUE,
    QUANTIZER_STEP_SIZE, SCALE_CONVERSION_TABLE, SCALE_TO_RESOLUTION_CURVE,
};
use gaudio_core::errors::{self, Result};
use gaudio_core::io::BitReaderLtr;

pub const SUBFRAMES_PER_FRAME: usize = 8;
pub const SAMPLES_PER_SUBFRAME: usize = 128;
const MDCT_BITS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    Discrete,
    StereoPrimary,
    StereoSecondary,
}

pub struct Channel {
    pub kind: ChannelType,
    coded_scalefactor_count: usize,

    intensity: [u8; SUBFRAMES_PER_FRAME],
    scalefactors: [u8; SAMPLES_PER_SUBFRAME],
    resolution: [u8; SAMPLES_PER_SUBFRAME],
    hfr_scales: [u8; SAMPLES_PER_SUBFRAME],

    gain: [f32; SAMPLES_PER_SUBFRAME],
    spectra: [f32; SAMPLES_PER_SUBFRAME],
    temp: [f32; SAMPLES_PER_SUBFRAME],
    dct: [f32; SAMPLES_PER_SUBFRAME],
    imdct_previous: [f32; SAMPLES_PER_SUBFRAME],

    pub wave: [[f32; SAMPLES_PER_SUBFRAME]; SUBFRAMES_PER_FRAME],
}

impl Channel {
    fn new(kind: ChannelType, coded_scalefactor_count: usize) -> Self {
        Channel {
            kind,
            coded_scalefactor_count,
            intensity: [0; SUBFRAMES_PER_FRAME],
            scalefactors: [0; SAMPLES_PER_SUBFRAME],
            resolution: [0; SAMPLES_PER_SUBFRAME],
            hfr_scales: [0; SAMPLES_PER_SUBFRAME],
            gain: [0.0; SAMPLES_PER_SUBFRAME],
            spectra: [0.0; SAMPLES_PER_SUBFRAME],
            temp: [0.0; SAMPLES_PER_SUBFRAME],
            dct: [0.0; SAMPLES_PER_SUBFRAME],
            imdct_previous: [0.0; SAMPLES_PER_SUBFRAME],
            wave: [[0.0; SAMPLES_PER_SUBFRAME]; SUBFRAMES_PER_FRAME],
        }
    }

    pub fn reset(&mut self) {
        self.imdct_previous = [0.0; SAMPLES_PER_SUBFRAME];
    }
}

/// Assigns discrete/stereo-primary/stereo-secondary roles to every channel, one
/// `channels_per_track`-sized group per track (spec §4.2's channel-type-assignment table).
pub fn build_channels(hdr: &Header) -> Result<Vec<Channel>> {
    let channels = hdr.channels as usize;
    let track_count = hdr.track_count as usize;
    if track_count == 0 || channels % track_count != 0 {
        return errors::bad_params("HCA channel count is not a multiple of track_count");
    }
    let channels_per_track = channels / track_count;

    let mut kinds = vec![ChannelType::Discrete; channels];
    if hdr.stereo_band_count > 0 && channels_per_track > 1 {
        use ChannelType::*;
        for t in 0..track_count {
            let base = t * channels_per_track;
            let layout: &[ChannelType] = match channels_per_track {
                2 => &[StereoPrimary, StereoSecondary],
                3 => &[StereoPrimary, StereoSecondary, Discrete],
                4 => {
                    if hdr.channel_config == 0 {
                        &[StereoPrimary, StereoSecondary, StereoPrimary, StereoSecondary]
                    }
                    else {
                        &[StereoPrimary, StereoSecondary, Discrete, Discrete]
                    }
                }
                5 => {
                    if hdr.channel_config <= 2 {
                        &[StereoPrimary, StereoSecondary, Discrete, StereoPrimary, StereoSecondary]
                    }
                    else {
                        &[StereoPrimary, StereoSecondary, Discrete, Discrete, Discrete]
                    }
                }
                6 => &[StereoPrimary, StereoSecondary, Discrete, Discrete, StereoPrimary, StereoSecondary],
                7 => &[
                    StereoPrimary,
                    StereoSecondary,
                    Discrete,
                    Discrete,
                    StereoPrimary,
                    StereoSecondary,
                    Discrete,
                ],
                8 => &[
                    StereoPrimary,
                    StereoSecondary,
                    Discrete,
                    Discrete,
                    StereoPrimary,
                    StereoSecondary,
                    StereoPrimary,
                    StereoSecondary,
                ],
                _ => &[],
            };
            for (i, &kind) in layout.iter().enumerate() {
                kinds[base + i] = kind;
            }
        }
    }

    let base_plus_stereo = (hdr.base_band_count + hdr.stereo_band_count) as usize;
    Ok(kinds
        .into_iter()
        .map(|kind| {
            let coded_scalefactor_count =
                if kind != ChannelType::StereoSecondary { base_plus_stereo } else { hdr.base_band_count as usize };
            Channel::new(kind, coded_scalefactor_count)
        })
        .collect())
}

/// decode1: unpack scalefactors/intensity/HFR scales for one channel and derive per-band gain.
pub fn decode1_unpack_channel(
    ch: &mut Channel,
    br: &mut BitReaderLtr<'_>,
    hfr_group_count: usize,
    packed_noise_level: i32,
    ath_curve: &[u8; SAMPLES_PER_SUBFRAME],
) -> Result<()> {
    let csf_count = ch.coded_scalefactor_count;

    let delta_bits = br.read_bits(3)?;
    if delta_bits >= 6 {
        for slot in ch.scalefactors[..csf_count].iter_mut() {
            *slot = br.read_bits(6)? as u8;
        }
    }
    else if delta_bits > 0 {
        let expected_delta: i32 = (1 << delta_bits) - 1;
        let extra_delta = expected_delta >> 1;
        let mut prev = br.read_bits(6)? as i32;
        ch.scalefactors[0] = prev as u8;
        for i in 1..csf_count {
            let delta = br.read_bits(delta_bits)? as i32;
            if delta != expected_delta {
                let test = prev + (delta - extra_delta);
                if test < 0 || test > 64 {
                    return errors::unpack_error("HCA delta scalefactor out of range");
                }
                prev += delta - extra_delta;
            }
            else {
                prev = br.read_bits(6)? as i32;
            }
            ch.scalefactors[i] = prev as u8;
        }
    }
    else {
        ch.scalefactors[..csf_count].fill(0);
    }
    ch.scalefactors[csf_count..].fill(0);

    if ch.kind == ChannelType::StereoSecondary {
        let first = br.peek_bits(4)? as u8;
        ch.intensity[0] = first;
        if first < 15 {
            for slot in ch.intensity.iter_mut() {
                *slot = br.read_bits(4)? as u8;
            }
        }
    }
    else {
        for i in 0..hfr_group_count {
            ch.hfr_scales[i] = br.read_bits(6)? as u8;
        }
    }

    for i in 0..csf_count {
        let scalefactor = ch.scalefactors[i];
        let resolution = if scalefactor > 0 {
            let noise_level = ath_curve[i] as i32 + ((packed_noise_level + i as i32) >> 8);
            let curve_position = noise_level - ((5 * scalefactor as i32) >> 1) + 1;
            if curve_position < 0 {
                15
            }
            else if curve_position >= 57 {
                1
            }
            else {
                SCALE_TO_RESOLUTION_CURVE[curve_position as usize]
            }
        }
        else {
            0
        };
        ch.resolution[i] = resolution;
    }
    ch.resolution[csf_count..].fill(0);

    for i in 0..csf_count {
        let scale = DEQUANTIZER_SCALING_TABLE[ch.scalefactors[i] as usize];
        let step = QUANTIZER_STEP_SIZE[ch.resolution[i] as usize];
        ch.gain[i] = scale * step;
    }

    Ok(())
}

/// decode2: read and dequantize the coded spectral coefficients for one subframe.
pub fn decode2_dequantize_coefficients(ch: &mut Channel, br: &mut BitReaderLtr<'_>) -> Result<()> {
    let csf_count = ch.coded_scalefactor_count;

    for i in 0..csf_count {
        let resolution = ch.resolution[i] as usize;
        let bits = QUANTIZED_SPECTRUM_MAX_BITS[resolution] as u32;
        let code = br.read_bits(bits)?;

        let qc = if resolution < 8 {
            let index = (code + ((resolution as u32) << 4)) as usize;
            let extra_bits = QUANTIZED_SPECTRUM_BITS[index] as u32 - bits;
            if extra_bits > 0 {
                br.read_bits(extra_bits)?;
            }
            QUANTIZED_SPECTRUM_VALUE[index]
        }
        else {
            let signed_code = (1 - ((code as i32 & 1) << 1)) * (code as i32 >> 1);
            if signed_code == 0 {
                br.rewind(1);
            }
            signed_code as f32
        };

        ch.spectra[i] = ch.gain[i] * qc;
    }
    ch.spectra[csf_count..].fill(0.0);
    Ok(())
}

/// decode3: mirror the low bands into the high-frequency region for non-secondary channels.
pub fn decode3_reconstruct_high_frequency(
    ch: &mut Channel,
    hfr_group_count: usize,
    bands_per_hfr_group: usize,
    stereo_band_count: usize,
    base_band_count: usize,
    total_band_count: usize,
) {
    if ch.kind == ChannelType::StereoSecondary || bands_per_hfr_group == 0 {
        return;
    }

    let start_band = stereo_band_count + base_band_count;
    let mut highband = start_band;
    let mut lowband = start_band.wrapping_sub(1);

    for group in 0..hfr_group_count {
        for _ in 0..bands_per_hfr_group {
            if highband >= total_band_count {
                break;
            }
            let sc_index = (ch.hfr_scales[group] as i32 - ch.scalefactors[lowband] as i32 + 64) as usize;
            ch.spectra[highband] = SCALE_CONVERSION_TABLE[sc_index] * ch.spectra[lowband];
            highband += 1;
            lowband = lowband.wrapping_sub(1);
        }
    }

    ch.spectra[SAMPLES_PER_SUBFRAME - 1] = 0.0;
}

/// decode4: redistribute a primary/secondary pair's high bands according to the secondary
/// channel's per-subframe intensity index. The secondary channel's own high bands are overwritten
/// from the primary's (already HFR-reconstructed) spectrum, since a stereo-secondary channel never
/// runs its own HFR reconstruction — call this with two disjoint `&mut Channel` borrows from the
/// same `Vec<Channel>`, e.g. via `split_at_mut`.
pub fn decode4_apply_intensity_stereo(
    primary: &mut Channel,
    secondary: &mut Channel,
    subframe: usize,
    total_band_count: usize,
    base_band_count: usize,
    stereo_band_count: usize,
) {
    if primary.kind != ChannelType::StereoPrimary || stereo_band_count == 0 {
        return;
    }
    let ratio_l = INTENSITY_RATIO_TABLE[secondary.intensity[subframe] as usize];
    let ratio_r = ratio_l - 2.0;
    for band in base_band_count..total_band_count {
        secondary.spectra[band] = primary.spectra[band] * ratio_r;
        primary.spectra[band] *= ratio_l;
    }
}

/// decode5: run the 128-point DCT-IV (realized as the usual two-pass FFT-like butterfly over
/// `MDCT_BITS` stages) and then window/overlap-add into this subframe's output samples.
pub fn decoder5_run_imdct(ch: &mut Channel, subframe: usize) {
    let half = SAMPLES_PER_SUBFRAME / 2;

    // Stage 1: radix-2 decimation, ping-ponging between `spectra` and `temp`. Each of the
    // `MDCT_BITS` passes reads the whole buffer once and writes the whole buffer once, so after
    // an odd number of passes the freshest data is in whichever local variable was the *read*
    // side going into the final pass (the swap at the bottom of the loop rotates the roles).
    {
        let mut src = ch.spectra;
        let mut dst = ch.temp;
        let mut count1 = 1usize;
        let mut count2 = half;
        for _ in 0..MDCT_BITS {
            let mut si = 0usize;
            let mut d1 = 0usize;
            let mut d2 = count2;
            for _ in 0..count1 {
                for _ in 0..count2 {
                    let a = src[si];
                    let b = src[si + 1];
                    si += 2;
                    dst[d1] = b + a;
                    d1 += 1;
                    dst[d2] = a - b;
                    d2 += 1;
                }
                d1 += count2;
                d2 += count2;
            }
            std::mem::swap(&mut src, &mut dst);
            count1 <<= 1;
            count2 >>= 1;
        }
        ch.temp = src;
        ch.spectra = dst;
    }

    // Stage 2: butterfly-combine with the per-stage sin/cos twiddle tables, same ping-pong.
    {
        let mut src = ch.temp;
        let mut dst = ch.spectra;
        let mut count1 = half;
        let mut count2 = 1usize;
        for stage in 0..MDCT_BITS as usize {
            let sin_table = &DCT_SIN_TABLES[stage];
            let cos_table = &DCT_COS_TABLES[stage];
            let mut s1 = 0usize;
            let mut s2 = count2;
            let mut d1 = 0usize;
            let mut d2 = count2 * 2 - 1;
            let mut twiddle = 0usize;
            for _ in 0..count1 {
                for _ in 0..count2 {
                    let a = src[s1];
                    let b = src[s2];
                    s1 += 1;
                    s2 += 1;
                    let sin = sin_table[twiddle];
                    let cos = cos_table[twiddle];
                    twiddle += 1;
                    dst[d1] = a * sin - b * cos;
                    d1 += 1;
                    dst[d2] = a * cos + b * sin;
                    d2 = d2.wrapping_sub(1);
                }
                s1 += count2;
                s2 += count2;
                d1 += count2;
                d2 = d2.wrapping_add(count2 * 3);
            }
            std::mem::swap(&mut src, &mut dst);
            count1 >>= 1;
            count2 <<= 1;
        }
        ch.spectra = src;
        ch.temp = dst;
    }

    ch.dct = ch.spectra;

    for i in 0..half {
        ch.wave[subframe][i] = IMDCT_WINDOW[i] * ch.dct[i + half] + ch.imdct_previous[i];
        ch.wave[subframe][i + half] =
            IMDCT_WINDOW[i + half] * ch.dct[SAMPLES_PER_SUBFRAME - 1 - i] - ch.imdct_previous[i + half];
        ch.imdct_previous[i] = IMDCT_WINDOW[SAMPLES_PER_SUBFRAME - 1 - i] * ch.dct[half - i - 1];
        ch.imdct_previous[i + half] = IMDCT_WINDOW[half - i - 1] * ch.dct[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_channel_stereo_band_layout_assigns_primary_secondary() {
        let mut hdr = Header::default();
        hdr.channels = 2;
        hdr.track_count = 1;
        hdr.stereo_band_count = 10;
        hdr.base_band_count = 20;
        let channels = build_channels(&hdr).unwrap();
        assert_eq!(channels[0].kind, ChannelType::StereoPrimary);
        assert_eq!(channels[1].kind, ChannelType::StereoSecondary);
    }

    #[test]
    fn mono_channel_is_discrete() {
        let mut hdr = Header::default();
        hdr.channels = 1;
        hdr.track_count = 1;
        let channels = build_channels(&hdr).unwrap();
        assert_eq!(channels[0].kind, ChannelType::Discrete);
    }
}
