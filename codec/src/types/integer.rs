//! Integers.
//!
//! Fixed-width integers are written big-endian at their full width: a port is always two bytes
//! and a traffic counter always eight.
//!
//! `usize` only ever holds a length or an item count, so it is written as a varint and must fit
//! in a `u32` on every platform. Reading one requires a [RangeCfg] bounding the accepted value.

use crate::{
    util::{at_least, len_size, read_len, write_len},
    EncodeSize, Error, FixedSize, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut};

macro_rules! big_endian {
    ($($type:ty),*) => {
        $(
            impl Write for $type {
                #[inline]
                fn write(&self, buf: &mut impl BufMut) {
                    buf.put_slice(&self.to_be_bytes());
                }
            }

            impl Read for $type {
                type Cfg = ();

                #[inline]
                fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                    let mut raw = [0u8; core::mem::size_of::<$type>()];
                    at_least(buf, raw.len())?;
                    buf.copy_to_slice(&mut raw);
                    Ok(<$type>::from_be_bytes(raw))
                }
            }

            impl FixedSize for $type {
                const SIZE: usize = core::mem::size_of::<$type>();
            }
        )*
    };
}

big_endian!(u8, u16, u32, u64, i8, i32, i64);

impl Write for usize {
    /// # Panics
    ///
    /// Panics if the value does not fit in a `u32`.
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(*self, buf);
    }
}

impl EncodeSize for usize {
    #[inline]
    fn encode_size(&self) -> usize {
        len_size(*self)
    }
}

impl Read for usize {
    type Cfg = RangeCfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &RangeCfg) -> Result<Self, Error> {
        read_len(buf, range)
    }
}
