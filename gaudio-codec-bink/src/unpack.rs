//! Per-channel coefficient unpack: two packed-float seed coefficients, per-band scalefactors, and
//! the RLE'd, variable-bit-width coefficient groups that follow (spec §4.3 steps 2a-2c).

use crate::tables::{float29_power, scalefactor, RLE_TABLE};
use gaudio_core::errors::Result;
use gaudio_core::io::BitReaderRtl;

/// Reads one "29-bit float": 5-bit power, 23-bit mantissa, 1-bit sign.
fn read_float29(br: &mut BitReaderRtl<'_>) -> Result<f32> {
    let code = br.read_bits(29)?;
    let power = code & 0x1f;
    let mantissa = (code >> 5) & 0x7FFFFF;
    let sign = (code >> 28) & 0x01;
    let value = mantissa as f32 * float29_power(power);
    Ok(if sign != 0 { -value } else { value })
}

/// Unpacks one channel's worth of spectral coefficients for one packet into `coefs`
/// (`coefs.len() == frame_samples`). `band_thresholds[band_count]` marks the end of the spectrum.
pub fn unpack_channel(
    coefs: &mut [f32],
    band_count: usize,
    br: &mut BitReaderRtl<'_>,
    band_thresholds: &[u32],
    is_binka2: bool,
) -> Result<()> {
    let frame_samples = coefs.len();

    coefs[0] = read_float29(br)?;
    coefs[1] = read_float29(br)?;

    let index_bits = if is_binka2 { 7 } else { 8 };
    let mut scalefactors = [0f32; 26];
    for s in scalefactors.iter_mut().take(band_count) {
        *s = scalefactor(br.read_bits(index_bits)?);
    }

    let mut band = 0usize;
    let mut band_scalefactor = 0f32;
    let mut pos = 2usize;

    while pos < frame_samples {
        let rle_flag = br.read_bool()?;
        let group_len = if rle_flag {
            let rle_index = br.read_bits(4)? as usize;
            8 * RLE_TABLE[rle_index] as usize
        }
        else {
            8
        };
        let end = (pos + group_len).min(frame_samples);

        let q_bits = br.read_bits(4)?;
        if q_bits == 0 {
            coefs[pos..end].fill(0.0);
            while band < band_count && end > (band_thresholds[band] as usize) * 2 {
                band_scalefactor = scalefactors[band];
                band += 1;
            }
            pos = end;
            continue;
        }

        if is_binka2 {
            for p in pos..end {
                coefs[p] = br.read_bits(q_bits)? as f32;
            }
            for p in pos..end {
                if coefs[p] != 0.0 && br.read_bool()? {
                    coefs[p] = -coefs[p];
                }
            }
            while pos < end {
                if band < band_count && pos == (band_thresholds[band] as usize) * 2 {
                    band_scalefactor = scalefactors[band];
                    band += 1;
                }
                coefs[pos] *= band_scalefactor;
                pos += 1;
            }
        }
        else {
            while pos < end {
                if band < band_count && pos == (band_thresholds[band] as usize) * 2 {
                    band_scalefactor = scalefactors[band];
                    band += 1;
                }
                let value = br.read_bits(q_bits)?;
                coefs[pos] = if value != 0 {
                    let negative = br.read_bool()?;
                    let c = value as f32 * band_scalefactor;
                    if negative {
                        -c
                    }
                    else {
                        c
                    }
                }
                else {
                    0.0
                };
                pos += 1;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float29_zero_mantissa_is_zero() {
        // power=23 (bias so 2^0=1), mantissa=0, sign=0 -> code = 23
        let bytes = 23u32.to_le_bytes();
        let mut br = BitReaderRtl::new(&bytes);
        assert_eq!(read_float29(&mut br).unwrap(), 0.0);
    }
}
