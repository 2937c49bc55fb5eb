//! Flags and optional values.
//!
//! A `bool` is a single byte that must be `0` or `1`. An `Option<T>` is that byte followed by the
//! value when it is set.

use crate::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(u8::from(*self));
    }
}

impl Read for bool {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        match self {
            Some(value) => {
                true.write(buf);
                value.write(buf);
            }
            None => false.write(buf),
        }
    }
}

impl<T: EncodeSize> EncodeSize for Option<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        bool::SIZE + self.as_ref().map_or(0, EncodeSize::encode_size)
    }
}

impl<T: Read> Read for Option<T> {
    type Cfg = T::Cfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &T::Cfg) -> Result<Self, Error> {
        if bool::read(buf)? {
            T::read_cfg(buf, cfg).map(Some)
        } else {
            Ok(None)
        }
    }
}
