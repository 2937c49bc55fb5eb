//! Serialize the fields of versioned records.
//!
//! # Overview
//!
//! Records are stored as a flat sequence of fields. This crate writes and reads those fields: it
//! never panics on input, never allocates more than a [`RangeCfg`] allows, and reports exactly why
//! a field could not be read.
//!
//! # Field Types
//!
//! - Fixed-width integers (`u8` to `u64`, `i8`, `i32`, `i64`), big-endian
//! - `bool` and `Option<T>`, behind a one-byte flag
//! - `String`, `Bytes` and `Vec<T>`, behind a varint length checked against a [`RangeCfg`]
//! - [`UInt`] for schema versions
//!
//! A composite value implements [`Write`], [`Read`] and [`EncodeSize`] by visiting its fields in
//! order, or [`FixedSize`] when its length never changes.
//!
//! # Failure Modes
//!
//! Reading a value either consumes exactly the bytes [`Write::write`] produced or fails with an
//! [`Error`]. [`Error::EndOfBuffer`] is the only error caused by running out of input; every other
//! variant means the bytes present are not a valid encoding (see [`Error::is_underflow`]).
//!
//! # Composite Fields
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use waypoint_codec::{Decode, Encode, EncodeSize, Error, RangeCfg, Read, ReadExt, Write};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//!     weight: Option<u32>,
//! }
//!
//! impl Write for Endpoint {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.host.write(buf);
//!         self.port.write(buf);
//!         self.weight.write(buf);
//!     }
//! }
//!
//! impl Read for Endpoint {
//!     // Maximum host length
//!     type Cfg = usize;
//!
//!     fn read_cfg(buf: &mut impl Buf, max: &usize) -> Result<Self, Error> {
//!         let host = String::read_cfg(buf, &RangeCfg::new(..=*max))?;
//!         let port = u16::read(buf)?;
//!         let weight = <Option<u32>>::read(buf)?;
//!         Ok(Self { host, port, weight })
//!     }
//! }
//!
//! impl EncodeSize for Endpoint {
//!     fn encode_size(&self) -> usize {
//!         self.host.encode_size() + self.port.encode_size() + self.weight.encode_size()
//!     }
//! }
//!
//! let endpoint = Endpoint { host: "relay.example".into(), port: 443, weight: None };
//! let encoded = endpoint.encode();
//! assert_eq!(Endpoint::decode_cfg(encoded, &64).unwrap(), endpoint);
//! ```
//!
//! # Fixed-Width Composites
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use waypoint_codec::{DecodeExt, Encode, Error, FixedSize, Read, ReadExt, Write};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Traffic {
//!     tx: u64,
//!     rx: u64,
//! }
//!
//! impl Write for Traffic {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.tx.write(buf);
//!         self.rx.write(buf);
//!     }
//! }
//!
//! impl Read for Traffic {
//!     type Cfg = ();
//!
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let tx = u64::read(buf)?;
//!         let rx = u64::read(buf)?;
//!         Ok(Self { tx, rx })
//!     }
//! }
//!
//! impl FixedSize for Traffic {
//!     const SIZE: usize = u64::SIZE + u64::SIZE;
//! }
//!
//! let traffic = Traffic { tx: 1, rx: 2 };
//! assert_eq!(traffic.encode().len(), 16);
//! assert_eq!(Traffic::decode(traffic.encode()).unwrap(), traffic);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod types;
mod util;
pub mod varint;

pub use codec::{Decode, DecodeExt, Encode, EncodeSize, FixedSize, Read, ReadExt, Write};
pub use config::RangeCfg;
pub use error::Error;
pub use varint::UInt;
