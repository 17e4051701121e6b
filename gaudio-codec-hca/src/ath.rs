//! Absolute Threshold of Hearing curve used to bias resolution selection away from
//! inaudible bands (spec §4.2).

use crate::tables::ATH_BASE_CURVE;
use gaudio_core::errors::{self, Result};

const SAMPLES_PER_SUBFRAME: usize = 128;

pub fn build_curve(ath_type: u32, sample_rate: u32) -> Result<[u8; SAMPLES_PER_SUBFRAME]> {
    let mut curve = [0u8; SAMPLES_PER_SUBFRAME];
    match ath_type {
        0 => {}
        1 => {
            let mut acc: u32 = 0;
            for (i, slot) in curve.iter_mut().enumerate() {
                acc += sample_rate;
                let index = (acc >> 13) as usize;
                if index >= 654 {
                    for s in &mut curve[i..] {
                        *s = 0xFF;
                    }
                    break;
                }
                *slot = ATH_BASE_CURVE[index];
            }
        }
        _ => return errors::bad_params("unsupported HCA ATH type"),
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_curve_is_all_zero() {
        let curve = build_curve(0, 44100).unwrap();
        assert!(curve.iter().all(|&v| v == 0));
    }

    #[test]
    fn scaled_curve_starts_from_the_base_table() {
        let curve = build_curve(1, 44100).unwrap();
        assert_eq!(curve[0], ATH_BASE_CURVE[44100 >> 13]);
    }
}
