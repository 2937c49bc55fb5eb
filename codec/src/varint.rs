//! Unsigned LEB128 varints.
//!
//! A varint is written seven bits at a time, least significant group first. The high bit of each
//! byte is set when another byte follows. Schema versions and length prefixes are almost always
//! below 128 and take a single byte.
//!
//! Only the shortest encoding of a value is accepted, so every blob has one canonical form.

use crate::{EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};

const MORE: u8 = 0x80;
const PAYLOAD: u8 = 0x7F;
const GROUP_BITS: u32 = 7;

/// An unsigned integer that can be written as a varint.
pub trait Varint: Copy {
    /// Longest encoding of any value of this type.
    const MAX_LEN: usize;

    fn widen(self) -> u64;

    /// Returns `None` if `value` does not fit.
    fn narrow(value: u64) -> Option<Self>;
}

macro_rules! varint {
    ($($type:ty),*) => {
        $(
            impl Varint for $type {
                const MAX_LEN: usize = (<$type>::BITS as usize).div_ceil(GROUP_BITS as usize);

                #[inline]
                fn widen(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                fn narrow(value: u64) -> Option<Self> {
                    <$type>::try_from(value).ok()
                }
            }
        )*
    };
}

varint!(u8, u16, u32, u64);

/// Appends `value` as a varint.
pub fn write(value: impl Varint, buf: &mut impl BufMut) {
    let mut rest = value.widen();
    while rest > u64::from(PAYLOAD) {
        buf.put_u8(rest as u8 | MORE);
        rest >>= GROUP_BITS;
    }
    buf.put_u8(rest as u8);
}

/// Number of bytes [write] appends for `value`.
pub fn size(value: impl Varint) -> usize {
    let bits = u64::BITS - value.widen().leading_zeros();
    bits.div_ceil(GROUP_BITS).max(1) as usize
}

/// Reads a varint of type `T`.
///
/// Fails with [Error::EndOfBuffer] if the buffer ends inside the varint and with
/// [Error::InvalidVarint] if the value does not fit in `T` or is not in its shortest form.
pub fn read<T: Varint>(buf: &mut impl Buf) -> Result<T, Error> {
    let mut value = 0u64;
    for index in 0..T::MAX_LEN {
        if !buf.has_remaining() {
            return Err(Error::EndOfBuffer);
        }
        let byte = buf.get_u8();
        let group = u64::from(byte & PAYLOAD);
        let shift = index as u32 * GROUP_BITS;
        if (group << shift) >> shift != group {
            return Err(Error::InvalidVarint);
        }
        value |= group << shift;
        if byte & MORE == 0 {
            // A zero final group after the first byte could have been left out.
            if index > 0 && group == 0 {
                return Err(Error::InvalidVarint);
            }
            return T::narrow(value).ok_or(Error::InvalidVarint);
        }
    }
    Err(Error::InvalidVarint)
}

/// Writes the wrapped integer as a varint instead of at its fixed width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt<T: Varint>(pub T);

impl<T: Varint> Write for UInt<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write(self.0, buf);
    }
}

impl<T: Varint> EncodeSize for UInt<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        size(self.0)
    }
}

impl<T: Varint> Read for UInt<T> {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        read(buf).map(UInt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode};

    #[test]
    fn test_known_encodings() {
        assert_eq!(UInt(0u32).encode(), &[0x00][..]);
        assert_eq!(UInt(1u32).encode(), &[0x01][..]);
        assert_eq!(UInt(127u32).encode(), &[0x7F][..]);
        assert_eq!(UInt(128u32).encode(), &[0x80, 0x01][..]);
        assert_eq!(UInt(300u16).encode(), &[0xAC, 0x02][..]);
        assert_eq!(UInt(16_384u64).encode(), &[0x80, 0x80, 0x01][..]);
        assert_eq!(UInt(u32::MAX).encode(), &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F][..]);
        assert_eq!(UInt(u64::MAX).encode().len(), 10);
    }

    #[test]
    fn test_size_matches_write() {
        let mut value = 1u64;
        while value != 0 {
            for candidate in [value - 1, value, value | (value - 1)] {
                let mut buf = Vec::new();
                write(candidate, &mut buf);
                assert_eq!(buf.len(), size(candidate), "{candidate}");
                assert_eq!(read::<u64>(&mut &buf[..]), Ok(candidate));
            }
            value <<= 1;
        }
    }

    #[test]
    fn test_max_len() {
        assert_eq!(u8::MAX_LEN, 2);
        assert_eq!(u16::MAX_LEN, 3);
        assert_eq!(u32::MAX_LEN, 5);
        assert_eq!(u64::MAX_LEN, 10);
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(read::<u8>(&mut &[0x81, 0x01][..]), Ok(0x81));
        assert_eq!(read::<u8>(&mut &[0x80, 0x02][..]), Err(Error::InvalidVarint));
        assert_eq!(
            UInt::<u16>::decode(&[0xFF, 0xFF, 0x04][..]),
            Err(Error::InvalidVarint)
        );
    }

    #[test]
    fn test_too_long() {
        // The fifth byte of a u32 still asks for more.
        let encoded = [0xFFu8, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        assert_eq!(read::<u32>(&mut &encoded[..]), Err(Error::InvalidVarint));

        // The tenth byte of a u64 may only carry the top bit.
        let mut encoded = [0x80u8; 10];
        encoded[9] = 0x02;
        assert_eq!(read::<u64>(&mut &encoded[..]), Err(Error::InvalidVarint));
    }

    #[test]
    fn test_not_shortest() {
        assert_eq!(read::<u32>(&mut &[0x80, 0x00][..]), Err(Error::InvalidVarint));
        assert_eq!(read::<u32>(&mut &[0x81, 0x80, 0x00][..]), Err(Error::InvalidVarint));
        assert_eq!(read::<u32>(&mut &[0x00][..]), Ok(0));
    }

    #[test]
    fn test_truncated() {
        assert_eq!(read::<u32>(&mut &[0u8; 0][..]), Err(Error::EndOfBuffer));
        assert_eq!(read::<u32>(&mut &[0x80][..]), Err(Error::EndOfBuffer));
        assert_eq!(read::<u64>(&mut &[0xFF, 0xFF][..]), Err(Error::EndOfBuffer));
    }
}
