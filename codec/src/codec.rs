//! Traits implemented by every value that appears in a record.
//!
//! Writing is infallible and reading is fallible: a record is always produced by trusted code but
//! may be read back from a blob that was truncated, corrupted, or written by another release.

use crate::Error;
use bytes::{Buf, BufMut, BytesMut};

/// A value that can append its encoding to a buffer.
pub trait Write {
    /// Appends the encoding of `self` to `buf`.
    fn write(&self, buf: &mut impl BufMut);
}

/// The exact length of what [Write::write] appends.
pub trait EncodeSize {
    fn encode_size(&self) -> usize;
}

/// A value whose encoding always has the same length.
pub trait FixedSize {
    const SIZE: usize;
}

impl<T: FixedSize> EncodeSize for T {
    #[inline]
    fn encode_size(&self) -> usize {
        T::SIZE
    }
}

/// A value that can be parsed from the front of a buffer.
pub trait Read: Sized {
    /// Limits applied while reading, such as the longest accepted string. Values that need none
    /// use `()`.
    type Cfg: Clone + Send + Sync + 'static;

    /// Consumes the encoding of one value from `buf`.
    ///
    /// On error, `buf` has been advanced by an unspecified number of bytes.
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error>;
}

/// Shorthand for [Read::read_cfg] on values without limits.
pub trait ReadExt: Read<Cfg = ()> {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Self::read_cfg(buf, &())
    }
}

impl<T: Read<Cfg = ()>> ReadExt for T {}

/// Encodes a value into a buffer of exactly [EncodeSize::encode_size] bytes.
pub trait Encode: Write + EncodeSize {
    /// # Panics
    ///
    /// Panics if [Write::write] and [EncodeSize::encode_size] disagree.
    fn encode(&self) -> BytesMut {
        let size = self.encode_size();
        let mut buf = BytesMut::with_capacity(size);
        self.write(&mut buf);
        assert_eq!(buf.len(), size, "encode_size() disagrees with write()");
        buf
    }
}

impl<T: Write + EncodeSize> Encode for T {}

/// Reads a value that must span the whole buffer.
pub trait Decode: Read {
    /// Fails with [Error::ExtraData] if bytes remain after the value.
    fn decode_cfg(mut buf: impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let value = Self::read_cfg(&mut buf, cfg)?;
        match buf.remaining() {
            0 => Ok(value),
            extra => Err(Error::ExtraData(extra)),
        }
    }
}

impl<T: Read> Decode for T {}

/// Shorthand for [Decode::decode_cfg] on values without limits.
pub trait DecodeExt: Decode + Read<Cfg = ()> {
    fn decode(buf: impl Buf) -> Result<Self, Error> {
        Self::decode_cfg(buf, &())
    }
}

impl<T: Read<Cfg = ()>> DecodeExt for T {}
