//! The contract every profile kind implements.
//!
//! # Format
//!
//! A record is persisted as its schema version followed by its fields in declaration order:
//!
//! ```text
//! +----------------+---------+---------+-----+---------+
//! | version (UInt) | field 1 | field 2 | ... | field n |
//! +----------------+---------+---------+-----+---------+
//! ```
//!
//! Required fields are written bare (their declared default when unset). Optional fields are
//! preceded by a one-byte presence flag. There is no framing, checksum or field count: a reader
//! relies on the version alone to know which fields to expect.
//!
//! # Versioning
//!
//! Each field records the layout version that introduced it. When reading a blob written with
//! version `v`, fields introduced after `v` are left unset. Bytes following the last field this
//! code knows about (written by a newer layout) are ignored. New fields must therefore only ever
//! be appended, together with a bump of [Record::VERSION].
//!
//! # Recovery
//!
//! [Record::read] never fails. If the blob ends early or contains a malformed value, reading
//! stops and the returned [Progress] describes how far it got. Fields read before the failure
//! keep their values. [Record::fill_defaults] then assigns the declared default to every
//! required field still unset.

use crate::{field::FieldReader, Config, Kind};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::fmt::Debug;
use waypoint_codec::{EncodeSize, Error, ReadExt, UInt, Write};

/// How far [Record::read] got through a blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Every field the blob's version declares (and this code knows) was read.
    Complete {
        /// Schema version of the blob.
        version: u32,
        /// Number of fields read.
        fields: usize,
    },
    /// Reading stopped at the first field that could not be decoded.
    Stopped {
        /// Schema version of the blob, if it could be read.
        version: Option<u32>,
        /// Number of fields read before the failure.
        fields: usize,
        /// Number of fields the blob's version declares.
        declared: usize,
        /// The failure that stopped reading.
        error: Error,
    },
}

impl Progress {
    /// Returns true if reading did not stop early.
    pub fn is_complete(&self) -> bool {
        matches!(self, Progress::Complete { .. })
    }

    /// Returns the schema version of the blob, if it could be read.
    pub fn version(&self) -> Option<u32> {
        match self {
            Progress::Complete { version, .. } => Some(*version),
            Progress::Stopped { version, .. } => *version,
        }
    }

    /// Returns the number of fields read.
    pub fn fields(&self) -> usize {
        match self {
            Progress::Complete { fields, .. } | Progress::Stopped { fields, .. } => *fields,
        }
    }
}

/// A profile kind with a versioned binary layout.
///
/// Implementations are generated by the `record!` macro.
pub trait Record: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// The kind this record is stored as.
    const KIND: Kind;

    /// The current layout version.
    const VERSION: u32;

    /// The number of fields in the current layout.
    const FIELDS: usize;

    /// Returns the number of fields a blob written with `version` contains (and this code knows).
    fn declared(version: u32) -> usize;

    /// Writes every field (without the version).
    fn write_fields(&self, buf: &mut impl BufMut);

    /// Returns the encoded size of every field (without the version).
    fn fields_size(&self) -> usize;

    /// Reads every field the reader's version declares, stopping at the first failure.
    fn read_fields<B: Buf>(&mut self, reader: &mut FieldReader<'_, B>) -> Result<(), Error>;

    /// Assigns the declared default to every unset required field.
    ///
    /// Only unset fields are touched, so calling this any number of times (including after a
    /// complete read) yields the same record.
    fn fill_defaults(&mut self);

    /// Writes the version followed by every field.
    fn write(&self, buf: &mut impl BufMut) {
        UInt(Self::VERSION).write(buf);
        self.write_fields(buf);
    }

    /// Returns the number of bytes [Record::write] produces.
    fn encode_size(&self) -> usize {
        UInt(Self::VERSION).encode_size() + self.fields_size()
    }

    /// Encodes the record into a blob.
    fn encode(&self) -> Bytes {
        let len = self.encode_size();
        let mut buf = BytesMut::with_capacity(len);
        self.write(&mut buf);
        assert_eq!(buf.len(), len, "write() did not write expected bytes");
        buf.freeze()
    }

    /// Reads a blob into this record, returning how far it got.
    fn read(&mut self, buf: &mut impl Buf, cfg: &Config) -> Progress {
        let version = match UInt::<u32>::read(buf) {
            Ok(UInt(version)) => version,
            Err(error) => {
                return Progress::Stopped {
                    version: None,
                    fields: 0,
                    declared: Self::FIELDS,
                    error,
                }
            }
        };
        let mut reader = FieldReader::new(buf, cfg, version);
        match self.read_fields(&mut reader) {
            Ok(()) => Progress::Complete {
                version,
                fields: reader.fields(),
            },
            Err(error) => Progress::Stopped {
                version: Some(version),
                fields: reader.fields(),
                declared: Self::declared(version),
                error,
            },
        }
    }
}

/// Writes a required field, falling back to its default when unset.
#[doc(hidden)]
#[inline]
pub fn write_required<T: Write>(
    slot: &Option<T>,
    default: impl FnOnce() -> T,
    buf: &mut impl BufMut,
) {
    match slot {
        Some(value) => value.write(buf),
        None => default().write(buf),
    }
}

/// Returns the encoded size of a required field, falling back to its default when unset.
#[doc(hidden)]
#[inline]
pub fn required_size<T: EncodeSize>(slot: &Option<T>, default: impl FnOnce() -> T) -> usize {
    match slot {
        Some(value) => value.encode_size(),
        None => default().encode_size(),
    }
}

/// Declares a record: a struct of optional slots plus its [Record] implementation.
///
/// Each field is declared as `name: Type [= default] [, since version];`. Fields with a default
/// are required (always written, filled by [Record::fill_defaults]); fields without one are
/// optional and written behind a presence flag. `since` defaults to `0`.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            const KIND = $kind:ident;
            const VERSION = $version:literal;

            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty $(= $default:expr)? $(, since $since:literal)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::record::Record for $name {
            const KIND: $crate::Kind = $crate::Kind::$kind;
            const VERSION: u32 = $version;
            const FIELDS: usize = 0 $(+ $crate::record::record!(@one $field))*;

            fn declared(version: u32) -> usize {
                let version = version.min(Self::VERSION);
                0 $(+ usize::from($crate::record::record!(@since $field $($since)?) <= version))*
            }

            fn write_fields(&self, buf: &mut impl ::bytes::BufMut) {
                $($crate::record::record!(@write self.$field, buf $(, $default)?);)*
            }

            fn fields_size(&self) -> usize {
                0 $(+ $crate::record::record!(@size self.$field $(, $default)?))*
            }

            fn read_fields<B: ::bytes::Buf>(
                &mut self,
                reader: &mut $crate::field::FieldReader<'_, B>,
            ) -> Result<(), ::waypoint_codec::Error> {
                $(
                    if $crate::record::record!(@since $field $($since)?) <= reader.version() {
                        self.$field = $crate::record::record!(@read reader, $ty $(, $default)?);
                    }
                )*
                Ok(())
            }

            fn fill_defaults(&mut self) {
                $($crate::record::record!(@fill self.$field $(, $default)?);)*
            }
        }
    };

    (@one $field:ident) => { 1 };

    (@since $field:ident) => { 0u32 };
    (@since $field:ident $since:literal) => { $since };

    (@write $slot:expr, $buf:ident, $default:expr) => {
        $crate::record::write_required(&$slot, || $default, $buf)
    };
    (@write $slot:expr, $buf:ident) => {
        ::waypoint_codec::Write::write(&$slot, $buf)
    };

    (@size $slot:expr, $default:expr) => {
        $crate::record::required_size(&$slot, || $default)
    };
    (@size $slot:expr) => {
        ::waypoint_codec::EncodeSize::encode_size(&$slot)
    };

    (@read $reader:ident, $ty:ty, $default:expr) => {
        Some($reader.read::<$ty>()?)
    };
    (@read $reader:ident, $ty:ty) => {
        $reader.read::<Option<$ty>>()?
    };

    (@fill $slot:expr, $default:expr) => {
        if $slot.is_none() {
            $slot = Some($default);
        }
    };
    (@fill $slot:expr) => {};
}
pub(crate) use record;
