//! XWMA / RIFF-XMA container: a standard RIFF `WAVE` chunk walk for `fmt `, `data`, and the
//! optional `dpds` (decoded-packet cumulative data size) seek table.
//!
//! `xwma.c` delegates actual sample decoding to FFmpeg's WMA decoder; this workspace doesn't carry
//! a WMA bitstream decoder, so this module parses container metadata and the seek table only, the
//! way `xwma.c` always parses the `dpds` chunk unconditionally regardless of whether FFmpeg
//! support is compiled in.

use crate::riff::ChunkWalker;
use gaudio_core::common::{le_u16, le_u32};
use gaudio_core::errors::{bad_magic, bad_params, Result};

#[derive(Debug, Clone, Copy)]
pub struct XwmaFormat {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

pub struct XwmaStream<'a> {
    pub format: XwmaFormat,
    pub data: &'a [u8],
    /// Cumulative decoded-sample counts per packet, from the `dpds` chunk; empty if absent.
    pub seek_table: Vec<u32>,
}

impl<'a> XwmaStream<'a> {
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        if buf.len() < 12 || &buf[0..4] != b"RIFF" || &buf[8..12] != b"WAVE" {
            return bad_magic("xwma: not a RIFF/WAVE container");
        }

        let mut format = None;
        let mut data: Option<&[u8]> = None;
        let mut seek_table = Vec::new();

        for chunk in ChunkWalker::new(&buf[12..]) {
            match &chunk.tag {
                b"fmt " => {
                    if chunk.data.len() < 16 {
                        return bad_params("xwma fmt chunk truncated");
                    }
                    format = Some(XwmaFormat {
                        format_tag: le_u16(&chunk.data[0..2]),
                        channels: le_u16(&chunk.data[2..4]),
                        sample_rate: le_u32(&chunk.data[4..8]),
                        avg_bytes_per_sec: le_u32(&chunk.data[8..12]),
                        block_align: le_u16(&chunk.data[12..14]),
                        bits_per_sample: le_u16(&chunk.data[14..16]),
                    });
                }
                b"data" => data = Some(chunk.data),
                b"dpds" => {
                    seek_table = chunk.data.chunks_exact(4).map(le_u32).collect();
                }
                _ => {}
            }
        }

        let format = match format {
            Some(f) => f,
            None => return bad_params("xwma: missing fmt chunk"),
        };
        let data = match data {
            Some(d) => d,
            None => return bad_params("xwma: missing data chunk"),
        };

        Ok(XwmaStream { format, data, seek_table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file() -> Vec<u8> {
        let mut fmt = vec![0u8; 16];
        fmt[0..2].copy_from_slice(&0x0161u16.to_le_bytes());
        fmt[2..4].copy_from_slice(&2u16.to_le_bytes());
        fmt[4..8].copy_from_slice(&44100u32.to_le_bytes());

        let mut body = Vec::new();
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
        body.extend_from_slice(&fmt);
        body.extend_from_slice(b"data");
        body.extend_from_slice(&4u32.to_le_bytes());
        body.extend_from_slice(&[1, 2, 3, 4]);

        let mut file = Vec::new();
        file.extend_from_slice(b"RIFF");
        file.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
        file.extend_from_slice(b"WAVE");
        file.extend_from_slice(&body);
        file
    }

    #[test]
    fn parses_fmt_and_data() {
        let file = make_file();
        let stream = XwmaStream::parse(&file).unwrap();
        assert_eq!(stream.format.channels, 2);
        assert_eq!(stream.format.sample_rate, 44100);
        assert_eq!(stream.data, &[1, 2, 3, 4]);
        assert!(stream.seek_table.is_empty());
    }

    #[test]
    fn rejects_non_riff_input() {
        assert!(XwmaStream::parse(&[0u8; 20]).is_err());
    }
}
