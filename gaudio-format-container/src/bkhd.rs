//! BKHD: Wwise soundbank container. Indexes embedded `.wem` subsongs via `DIDX`/`DATA` chunks
//! (or, in banks with `version <= 26`, via an inline index inside the lone `DATA` chunk) and
//! hands each subsong's sliced bytes to whatever parses RIFF/RIFX `.wem` files; this crate
//! itself only locates the slice, it doesn't decode the inner codec.
//!
//! Big-endian banks (X360) aren't handled; `guess_endianness32bit`'s heuristic from the original
//! isn't reconstructable from a container-only port, so this module assumes little-endian bank
//! layout, which covers the PC/common case.

use crate::riff::ChunkWalker;
use gaudio_core::common::le_u32;
use gaudio_core::errors::{bad_magic, bad_params, Result};

#[derive(Debug, Clone, Copy)]
pub struct BkhdEntry {
    pub id: u32,
    pub offset: u32,
    pub size: u32,
}

pub struct BkhdBank<'a> {
    data: &'a [u8],
    pub entries: Vec<BkhdEntry>,
}

impl<'a> BkhdBank<'a> {
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        let base_offset = if buf.len() >= 12 && &buf[0..4] == b"AKBK" { 0x0c } else { 0 };
        if buf.len() < base_offset + 8 || &buf[base_offset..base_offset + 4] != b"BKHD" {
            return bad_magic("bkhd: missing BKHD chunk");
        }

        let header_size = le_u32(&buf[base_offset + 4..base_offset + 8]) as usize;
        let mut version = le_u32(&buf[base_offset + 8..base_offset + 12]);
        if version == 0 || version == 1 {
            version = le_u32(&buf[base_offset + 0x10..base_offset + 0x14]);
        }

        let body_offset = base_offset + 8 + header_size;
        if body_offset > buf.len() {
            return bad_params("bkhd: header chunk size exceeds file size");
        }

        let entries = if version <= 26 {
            Self::parse_legacy_index(buf, body_offset)?
        }
        else {
            Self::parse_didx_data(buf, body_offset)?
        };

        Ok(BkhdBank { data: buf, entries })
    }

    fn parse_legacy_index(buf: &'a [u8], body_offset: usize) -> Result<Vec<BkhdEntry>> {
        for chunk in ChunkWalker::new(&buf[body_offset..]) {
            if &chunk.tag != b"DATA" {
                continue;
            }
            let idx = chunk.data;
            if idx.len() < 0x20 {
                return bad_params("bkhd: legacy DATA index truncated");
            }
            let total_subsongs = le_u32(&idx[0x00..0x04]) as usize;
            let data_start = le_u32(&idx[0x18..0x1c]) as usize;
            // entries begin at 0x20 within DATA, each 0x18 bytes.
            let mut entries = Vec::with_capacity(total_subsongs);
            for i in 0..total_subsongs {
                let off = 0x20 + i * 0x18;
                if off + 0x18 > idx.len() {
                    return bad_params("bkhd: legacy DATA entry table truncated");
                }
                let id = le_u32(&idx[off + 0x08..off + 0x0c]);
                let rel_offset = le_u32(&idx[off + 0x10..off + 0x14]);
                let size = le_u32(&idx[off + 0x14..off + 0x18]);
                let offset = rel_offset.wrapping_add((data_start + 0x20) as u32);
                entries.push(BkhdEntry { id, offset, size });
            }
            return Ok(entries);
        }
        bad_params("bkhd: legacy bank has no DATA chunk")
    }

    fn parse_didx_data(buf: &'a [u8], body_offset: usize) -> Result<Vec<BkhdEntry>> {
        let mut didx: Option<&[u8]> = None;
        let mut data_offset = None;
        for chunk in ChunkWalker::new(&buf[body_offset..]) {
            match &chunk.tag {
                b"DIDX" => didx = Some(chunk.data),
                b"DATA" => data_offset = Some(body_offset + chunk.data_offset),
                _ => {}
            }
        }
        let didx = match didx {
            Some(d) => d,
            None => return bad_params("bkhd: missing DIDX chunk"),
        };
        let data_offset = match data_offset {
            Some(o) => o as u32,
            None => return bad_params("bkhd: missing DATA chunk"),
        };

        if didx.len() % 0x0c != 0 {
            return bad_params("bkhd: DIDX size not a multiple of entry size");
        }
        let entries = didx
            .chunks_exact(0x0c)
            .map(|e| BkhdEntry {
                id: le_u32(&e[0x00..0x04]),
                offset: le_u32(&e[0x04..0x08]).wrapping_add(data_offset),
                size: le_u32(&e[0x08..0x0c]),
            })
            .collect();
        Ok(entries)
    }

    pub fn subsong(&self, index: usize) -> Result<&'a [u8]> {
        let entry = match self.entries.get(index) {
            Some(e) => *e,
            None => return bad_params("bkhd: subsong index out of range"),
        };
        let start = entry.offset as usize;
        let end = start + entry.size as usize;
        if entry.size == 0 || end > self.data.len() {
            return bad_params("bkhd: subsong is a dummy/empty entry");
        }
        Ok(&self.data[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_modern_bank_with_one_subsong() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"BKHD");
        let header_body_len = 0x1c; // arbitrary, just needs version at +0x08
        buf.extend_from_slice(&(header_body_len as u32).to_le_bytes());
        let mut header_body = vec![0u8; header_body_len];
        header_body[0..4].copy_from_slice(&136u32.to_le_bytes()); // version > 26
        buf.extend_from_slice(&header_body);

        // DIDX: one entry (id, rel offset, size)
        buf.extend_from_slice(b"DIDX");
        buf.extend_from_slice(&0x0cu32.to_le_bytes());
        buf.extend_from_slice(&1234u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(&4u32.to_le_bytes());

        buf.extend_from_slice(b"DATA");
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(b"RIFF");

        let bank = BkhdBank::parse(&buf).unwrap();
        assert_eq!(bank.entries.len(), 1);
        assert_eq!(bank.entries[0].id, 1234);
        assert_eq!(bank.subsong(0).unwrap(), b"RIFF");
    }

    #[test]
    fn rejects_non_bkhd_input() {
        assert!(BkhdBank::parse(&[0u8; 16]).is_err());
    }
}
