//! Bit-level stream readers.

mod bit;

pub use bit::{BitReaderLtr, BitReaderRtl};
