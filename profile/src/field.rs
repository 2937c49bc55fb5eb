//! Reading individual record fields with configured bounds.
//!
//! Every value stored in a record implements [Field]. Writing reuses the codec's [Write] and
//! [EncodeSize]; reading goes through [Field::read_field] so that every variable-length value
//! is bounded by the [Config] the caller supplied.

use crate::Config;
use bytes::Buf;
use waypoint_codec::{EncodeSize, Error, RangeCfg, Read, ReadExt, Write};

/// A value that can be stored in a record slot.
pub trait Field: Write + EncodeSize + Clone + Sized {
    /// Reads the value, bounding any length prefix by `cfg`.
    fn read_field(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error>;
}

/// Implements [Field] for types whose codec needs no configuration.
macro_rules! impl_plain_field {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::field::Field for $type {
                #[inline]
                fn read_field(
                    buf: &mut impl ::bytes::Buf,
                    _: &$crate::Config,
                ) -> Result<Self, ::waypoint_codec::Error> {
                    <$type as ::waypoint_codec::ReadExt>::read(buf)
                }
            }
        )*
    };
}
pub(crate) use impl_plain_field;

impl_plain_field!(u8, u16, u32, u64, i32, i64, bool);

impl Field for String {
    #[inline]
    fn read_field(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        String::read_cfg(buf, &RangeCfg::new(..=cfg.max_text_len))
    }
}

impl<T: Field> Field for Vec<T> {
    fn read_field(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let len = usize::read_cfg(buf, &RangeCfg::new(..=cfg.max_items))?;
        let mut items = Vec::with_capacity(len.min(buf.remaining()));
        for _ in 0..len {
            items.push(T::read_field(buf, cfg)?);
        }
        Ok(items)
    }
}

impl<T: Field> Field for Option<T> {
    #[inline]
    fn read_field(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        if bool::read(buf)? {
            Ok(Some(T::read_field(buf, cfg)?))
        } else {
            Ok(None)
        }
    }
}

/// Reads the fields of one record, tracking how many were read successfully.
pub struct FieldReader<'a, B: Buf> {
    buf: &'a mut B,
    cfg: &'a Config,
    version: u32,
    fields: usize,
}

impl<'a, B: Buf> FieldReader<'a, B> {
    /// Creates a reader for a blob whose schema version has already been consumed.
    pub fn new(buf: &'a mut B, cfg: &'a Config, version: u32) -> Self {
        Self {
            buf,
            cfg,
            version,
            fields: 0,
        }
    }

    /// The schema version the blob was written with.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The number of fields read successfully so far.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// The number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Reads the next field.
    pub fn read<T: Field>(&mut self) -> Result<T, Error> {
        let value = T::read_field(&mut *self.buf, self.cfg)?;
        self.fields += 1;
        Ok(value)
    }
}
