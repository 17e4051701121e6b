//! The common error type shared by every codec and container crate in this workspace.

use std::fmt;

/// All possible errors reported while probing, dispatching, or decoding.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred while reading the underlying stream.
    Io(std::io::Error),
    /// Container or codec signature did not match what was expected.
    BadMagic(&'static str),
    /// A known container or codec reported a version this crate doesn't handle.
    UnsupportedVersion(&'static str),
    /// A CRC or checksum did not match (HCA header or frame).
    BadChecksum(&'static str),
    /// A frame did not begin with its expected sync pattern.
    BadSync(&'static str),
    /// A scalefactor, coefficient, or code fell outside its representable range.
    UnpackError(&'static str),
    /// The bit reader was asked to read past the end of the frame it was given.
    BitstreamOverrun(&'static str),
    /// A header field contradicted another, or a value outside supported bounds.
    BadParams(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {}", err),
            Error::BadMagic(what) => write!(f, "bad magic: {}", what),
            Error::UnsupportedVersion(what) => write!(f, "unsupported version: {}", what),
            Error::BadChecksum(what) => write!(f, "bad checksum: {}", what),
            Error::BadSync(what) => write!(f, "bad sync: {}", what),
            Error::UnpackError(what) => write!(f, "unpack error: {}", what),
            Error::BitstreamOverrun(what) => write!(f, "bitstream overrun: {}", what),
            Error::BadParams(what) => write!(f, "bad params: {}", what),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn bad_magic<T>(what: &'static str) -> Result<T> {
    Err(Error::BadMagic(what))
}

pub fn unsupported_version<T>(what: &'static str) -> Result<T> {
    Err(Error::UnsupportedVersion(what))
}

pub fn bad_checksum<T>(what: &'static str) -> Result<T> {
    Err(Error::BadChecksum(what))
}

pub fn bad_sync<T>(what: &'static str) -> Result<T> {
    Err(Error::BadSync(what))
}

pub fn unpack_error<T>(what: &'static str) -> Result<T> {
    Err(Error::UnpackError(what))
}

pub fn overrun<T>(what: &'static str) -> Result<T> {
    Err(Error::BitstreamOverrun(what))
}

pub fn bad_params<T>(what: &'static str) -> Result<T> {
    Err(Error::BadParams(what))
}
