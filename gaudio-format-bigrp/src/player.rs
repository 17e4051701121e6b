//! Per-subsong player: an intro block followed by a looping body block, mirroring
//! `icesnd_decode`'s state machine. Non-audio subsongs (data/midi) are surfaced as fixed-length
//! silence so a caller enumerating subsongs doesn't need to special-case them.

use crate::header::{BigrpCodec, BigrpEntry, BigrpHeader};
use gaudio_codec_ice::IceBlockDecoder;
use gaudio_core::errors::Result;

pub struct SubsongInfo {
    pub total_subsongs: u32,
    pub codec: BigrpCodec,
    pub sample_rate: u32,
    pub channels: u8,
    pub loop_start: i32,
    pub num_samples: i32,
    pub loop_flag: bool,
}

enum Stream {
    Audio { entry: BigrpEntry },
    Silence { codec: BigrpCodec, samples: i32, channels: u8 },
}

pub struct BigrpSubsong<'a> {
    data: &'a [u8],
    stream: Stream,
    intro_done: bool,
    intro_block: Option<IceBlockDecoder>,
    body_block: Option<IceBlockDecoder>,
    silence_done: i32,
}

impl<'a> BigrpSubsong<'a> {
    /// `data` is the whole `.bigrp` file. `subsong` is 1-based.
    pub fn open(data: &'a [u8], subsong: u32) -> Result<Self> {
        let hdr = BigrpHeader::parse(data)?;
        if subsong == 0 || subsong > hdr.total_subsongs {
            return gaudio_core::errors::bad_params("bigrp subsong index out of range");
        }

        let offset = hdr.entry_offset(subsong) as usize;
        let entry_buf = &data[offset..];
        let entry = BigrpEntry::parse(entry_buf)?;

        let stream = if entry.codec.is_audio() {
            Stream::Audio { entry }
        }
        else {
            Stream::Silence { codec: entry.codec, samples: entry.num_samples, channels: 1 }
        };

        let intro_done = match &stream {
            Stream::Audio { entry } => entry.intro_samples == 0,
            Stream::Silence { .. } => true,
        };

        Ok(BigrpSubsong { data, stream, intro_done, intro_block: None, body_block: None, silence_done: 0 })
    }

    pub fn info(&self, total_subsongs: u32) -> SubsongInfo {
        match &self.stream {
            Stream::Audio { entry } => SubsongInfo {
                total_subsongs,
                codec: entry.codec,
                sample_rate: entry.sample_rate,
                channels: entry.channels,
                loop_start: entry.loop_start,
                num_samples: entry.num_samples,
                loop_flag: entry.loop_flag,
            },
            Stream::Silence { codec, samples, channels } => SubsongInfo {
                total_subsongs,
                codec: *codec,
                sample_rate: 48000,
                channels: *channels,
                loop_start: 0,
                num_samples: *samples,
                loop_flag: false,
            },
        }
    }

    fn open_block(&self, entry: &BigrpEntry, offset: u32, zsize: u32, samples: u32) -> Result<IceBlockDecoder> {
        let start = offset as usize;
        let end = start + zsize as usize;
        if end > self.data.len() {
            return gaudio_core::errors::bad_params("bigrp block exceeds file size");
        }
        let block = &self.data[start..end];
        match entry.codec {
            BigrpCodec::Range => {
                IceBlockDecoder::new_range(block, entry.channels as usize, entry.frame_codes as usize, samples as usize)
            }
            BigrpCodec::Dct => IceBlockDecoder::new_dct(block),
            _ => unreachable!("non-audio codec never reaches block setup"),
        }
    }

    /// Decodes up to `max_samples` interleaved sample rows into `out` (replacing its contents up
    /// to the decoded length), returning the number of rows actually produced. Returns 0 once a
    /// non-looping stream is exhausted.
    pub fn decode(&mut self, out: &mut Vec<i16>, max_samples: usize) -> Result<usize> {
        let entry = match &self.stream {
            Stream::Audio { entry } => entry,
            Stream::Silence { samples, channels, .. } => {
                let remaining = (*samples - self.silence_done).max(0) as usize;
                let n = remaining.min(max_samples);
                out.resize(n * *channels as usize, 0);
                self.silence_done += n as i32;
                return Ok(n);
            }
        };

        let channels = entry.channels as usize;
        let mut total_done = 0usize;
        out.clear();

        while total_done < max_samples {
            if !self.intro_done {
                if self.intro_block.is_none() {
                    self.intro_block = Some(self.open_block(
                        entry,
                        entry.intro_offset,
                        entry.intro_zsize,
                        entry.intro_samples,
                    )?);
                }
                let block = self.intro_block.as_mut().unwrap();
                let remaining = max_samples - total_done;
                let mut row_buf = vec![0i16; remaining * channels];
                let (done, is_done) = block.decode(&mut row_buf, remaining)?;
                out.extend_from_slice(&row_buf[..done * channels]);
                total_done += done;
                if is_done {
                    self.intro_done = true;
                    self.intro_block = None;
                }
                if done == 0 {
                    break;
                }
            }
            else {
                if self.body_block.is_none() {
                    self.body_block =
                        Some(self.open_block(entry, entry.body_offset, entry.body_zsize, entry.body_samples)?);
                }
                let block = self.body_block.as_mut().unwrap();
                let remaining = max_samples - total_done;
                let mut row_buf = vec![0i16; remaining * channels];
                let (done, is_done) = block.decode(&mut row_buf, remaining)?;
                out.extend_from_slice(&row_buf[..done * channels]);
                total_done += done;
                if is_done {
                    // loop back to the body block on the next call, matching icesnd_decode's
                    // "loop_flag keeps re-initing body_init" behavior.
                    if entry.loop_flag {
                        self.body_block = None;
                    }
                    break;
                }
                if done == 0 {
                    break;
                }
                break; // stop on block boundary so callers can react to loop points
            }
        }

        Ok(total_done)
    }

    pub fn reset(&mut self) {
        let intro_samples = match &self.stream {
            Stream::Audio { entry } => entry.intro_samples,
            Stream::Silence { .. } => 0,
        };
        self.intro_done = intro_samples == 0;
        self.intro_block = None;
        self.body_block = None;
        self.silence_done = 0;
    }
}
