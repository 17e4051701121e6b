//! Inti Creates' two BIGRP sound codecs: the adaptive range decoder and the per-band DCT decoder.
//! Both are driven block-by-block (intro then body) rather than frame-by-frame; see
//! [`decoder::IceBlockDecoder`].

mod dct;
mod decoder;
mod range;
mod tables;
mod zlib;

pub use dct::{CodeInfo, DctDecoder};
pub use decoder::{IceBlockDecoder, IceCodec};
pub use range::RangeDecoder;
