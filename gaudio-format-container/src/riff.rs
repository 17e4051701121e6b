//! A small RIFF/list chunk walker, shared by the `bkhd` and `xwma` modules.
//!
//! Mirrors the teacher's `ChunksReader` (lazily tag-dispatched, one chunk at a time, 2-byte
//! aligned) but works directly over an in-memory slice rather than a stream, since every
//! container this crate parses is small enough to hold in full.

use gaudio_core::common::{be_u32, le_u32};

#[derive(Debug, Clone, Copy)]
pub struct RiffChunk<'a> {
    pub tag: [u8; 4],
    pub data: &'a [u8],
    /// Byte offset of `data`'s first byte within the slice the walker was built from.
    pub data_offset: usize,
}

/// Walks consecutive `tag(4) + len(4) + data(len, padded to 2)` chunks starting at `buf`'s front.
pub struct ChunkWalker<'a> {
    buf: &'a [u8],
    pos: usize,
    big_endian_len: bool,
}

impl<'a> ChunkWalker<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ChunkWalker { buf, pos: 0, big_endian_len: false }
    }

    /// RIFF chunk lengths are little-endian; some non-RIFF containers (BKHD's old format) that
    /// reuse this walker store big-endian lengths instead.
    pub fn with_big_endian_len(buf: &'a [u8]) -> Self {
        ChunkWalker { buf, pos: 0, big_endian_len: true }
    }
}

impl<'a> Iterator for ChunkWalker<'a> {
    type Item = RiffChunk<'a>;

    fn next(&mut self) -> Option<RiffChunk<'a>> {
        if self.pos & 1 == 1 {
            self.pos += 1;
        }
        if self.pos + 8 > self.buf.len() {
            return None;
        }
        let tag = [
            self.buf[self.pos],
            self.buf[self.pos + 1],
            self.buf[self.pos + 2],
            self.buf[self.pos + 3],
        ];
        let len_bytes = &self.buf[self.pos + 4..self.pos + 8];
        let len = if self.big_endian_len { be_u32(len_bytes) } else { le_u32(len_bytes) } as usize;
        let data_start = self.pos + 8;
        let data_end = data_start.checked_add(len)?;
        if data_end > self.buf.len() {
            return None;
        }
        self.pos = data_end;
        Some(RiffChunk { tag, data: &self.buf[data_start..data_end], data_offset: data_start })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_two_chunks_with_padding() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&3u32.to_le_bytes());
        buf.extend_from_slice(&[1, 2, 3, 0]); // one pad byte after odd-length data
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.extend_from_slice(&[9, 9]);

        let chunks: Vec<_> = ChunkWalker::new(&buf).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(&chunks[0].tag, b"fmt ");
        assert_eq!(chunks[0].data, &[1, 2, 3]);
        assert_eq!(&chunks[1].tag, b"data");
        assert_eq!(chunks[1].data, &[9, 9]);
    }
}
