//! Why a field could not be read.

use thiserror::Error;

/// Failure to read a value. Writing never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid varint")]
    InvalidVarint,
    #[error("invalid usize")]
    InvalidUsize,
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid enum: {0}")]
    InvalidEnum(u8),
    #[error("invalid data in {0}: {1}")]
    Invalid(&'static str, &'static str), // context, message
}

impl Error {
    /// Returns true if the buffer ended before the value was complete.
    ///
    /// This is the expected failure when reading a truncated blob or a blob written
    /// by a layout with fewer trailing fields.
    pub fn is_underflow(&self) -> bool {
        matches!(self, Error::EndOfBuffer)
    }

    /// Returns true if a length prefix, discriminant, or payload was outside its valid domain.
    pub fn is_malformed(&self) -> bool {
        !self.is_underflow()
    }
}
