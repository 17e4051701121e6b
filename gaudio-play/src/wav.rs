//! A minimal PCM16 WAV writer.
//!
//! Nothing in this workspace reads `.wav` as an output format, so there's no `symphonia-format-riff`
//! counterpart to lean on here; this mirrors the `RIFF`/`fmt `/`data` chunk shape the rest of the
//! workspace already reads (`gaudio-format-container::riff`) run in reverse.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub fn write_pcm16<P: AsRef<Path>>(path: P, sample_rate: u32, channels: u16, samples: &[i16]) -> io::Result<()> {
    let mut f = File::create(path)?;

    let bits_per_sample: u16 = 16;
    let block_align = channels * (bits_per_sample / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_size = (samples.len() * 2) as u32;
    let riff_size = 4 + (8 + 16) + (8 + data_size);

    f.write_all(b"RIFF")?;
    f.write_all(&riff_size.to_le_bytes())?;
    f.write_all(b"WAVE")?;

    f.write_all(b"fmt ")?;
    f.write_all(&16u32.to_le_bytes())?;
    f.write_all(&1u16.to_le_bytes())?; // PCM
    f.write_all(&channels.to_le_bytes())?;
    f.write_all(&sample_rate.to_le_bytes())?;
    f.write_all(&byte_rate.to_le_bytes())?;
    f.write_all(&block_align.to_le_bytes())?;
    f.write_all(&bits_per_sample.to_le_bytes())?;

    f.write_all(b"data")?;
    f.write_all(&data_size.to_le_bytes())?;
    for &s in samples {
        f.write_all(&s.to_le_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_well_formed_header() {
        let path = std::env::temp_dir().join("gaudio_play_wav_test.wav");
        write_pcm16(&path, 44100, 2, &[1, -1, 2, -2]).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 2);
        assert_eq!(&bytes[36..40], b"data");
        std::fs::remove_file(&path).ok();
    }
}
