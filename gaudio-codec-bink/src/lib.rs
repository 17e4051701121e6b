//! Bink Audio decoder: band/scalefactor unpack, DCT-III resynthesis, and overlap-add (spec §4.3).
//!
//! RDFT mode (old Bink 1.0 audio-in-video packets) is out of scope; only the DCT path used by
//! Bink 1.1 (BCF) and Bink 2 (UEBA) is implemented, matching the reference decoder's own
//! `//TODO: test RDFT stereo` note that it was never fully exercised either.

mod decoder;
mod tables;
mod unpack;

pub use decoder::{Bink, BinkMode, BinkOptions};
