//! Helpers shared by codec implementations.

use crate::{varint, Error, RangeCfg};
use bytes::{Buf, BufMut};

/// Fails with [Error::EndOfBuffer] unless `len` more bytes can be read.
#[inline]
pub(crate) fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Converts a length to the `u32` written in front of variable-length values.
///
/// # Panics
///
/// Panics if `len` does not fit in a `u32`.
#[inline]
fn length_prefix(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("length {len} does not fit in u32"))
}

#[inline]
pub(crate) fn write_len(len: usize, buf: &mut impl BufMut) {
    varint::write(length_prefix(len), buf);
}

#[inline]
pub(crate) fn len_size(len: usize) -> usize {
    varint::size(length_prefix(len))
}

/// Reads a length prefix and checks it against `range`.
#[inline]
pub(crate) fn read_len(buf: &mut impl Buf, range: &RangeCfg) -> Result<usize, Error> {
    let len = varint::read::<u32>(buf)?;
    let len = usize::try_from(len).map_err(|_| Error::InvalidUsize)?;
    range.check(len)
}
