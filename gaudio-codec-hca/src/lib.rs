//! CRI HCA decoder: header parsing, keycode cipher, ATH curve, and the per-subframe decode
//! pipeline (scalefactor unpack, dequantize, HFR reconstruction, intensity stereo, IMDCT).

mod ath;
mod channel;
mod cipher;
mod decoder;
mod header;
mod tables;

pub use decoder::{Hca, HcaOptions};
pub use header::Header;
