//! Both ICE codecs store their compressed streams the same way: a 4-byte decompressed-size
//! prefix (unused here; `ZlibDecoder` stops at the deflate stream's own end marker) followed by a
//! standard zlib stream. Blocks are small enough (on the order of a few MB per subsong block at
//! most) that fully inflating up front is simpler than the reference decoder's incremental
//! 0x100/0x800-byte refill loop, and produces byte-identical output.

use gaudio_core::errors::{unpack_error, Result};
use std::io::Read;

pub fn inflate_all(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 4 {
        return unpack_error("zlib block shorter than its size prefix");
    }
    let mut decoder = flate2::read::ZlibDecoder::new(&data[4..]);
    let mut out = Vec::new();
    if decoder.read_to_end(&mut out).is_err() {
        return unpack_error("zlib stream corrupt");
    }
    Ok(out)
}
