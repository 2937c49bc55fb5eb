//! Persist connection profiles as versioned binary records and recover them from any blob.
//!
//! # Overview
//!
//! Every kind of profile (SOCKS, Trojan, Hysteria, a proxy chain, a subscription, ...) is a
//! [Record]: a flat list of fields written after a schema version. Stored blobs outlive the code
//! that wrote them, so reading is built to never lose a profile:
//!
//! - Blobs written by an older release decode with the newer fields set to their defaults.
//! - Blobs written by a newer release decode with the unknown trailing fields ignored.
//! - Truncated or corrupted blobs decode up to the first bad field; the rest is defaulted.
//!
//! The [Deserializer] drives this process and hands the outcome of each decode to a [Reporter]
//! ([TracingReporter] by default). Only an unknown [Kind] identifier is an error.
//!
//! Profiles are stored inside an [Entity] (the row bookkeeping of a profile) and can be shared as
//! links (see [link]).
//!
//! # Example
//!
//! ```rust
//! use waypoint_profile::{records::Trojan, Deserializer, Kind, Profile, Record};
//!
//! let trojan = Trojan {
//!     server_address: Some("trojan.example.net".into()),
//!     password: Some("secret".into()),
//!     ..Default::default()
//! };
//! let blob = trojan.encode();
//!
//! let deserializer = Deserializer::default();
//! let Some(Profile::Trojan(decoded)) = deserializer.decode(Kind::Trojan, &blob) else {
//!     unreachable!();
//! };
//! assert_eq!(decoded.password.as_deref(), Some("secret"));
//! assert_eq!(decoded.server_port, Some(443));
//! ```

use thiserror::Error;

mod entity;
pub mod field;
mod kind;
pub mod link;
mod profile;
mod record;
pub mod records;
mod recovery;
pub mod registry;
mod security;

pub use entity::{Entity, Status};
pub use kind::Kind;
pub use profile::{Probe, Profile};
pub use record::{Progress, Record};
pub use recovery::{encode, Config, Deserializer, NoopReporter, Reporter, TracingReporter};
pub use security::Security;

/// Errors that can occur when resolving kinds or decoding an [Entity].
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown kind: {0}")]
    UnknownKind(u32),
    #[error("unknown kind name: {0}")]
    UnknownKindName(String),
    #[error("unsupported envelope version: {0}")]
    UnsupportedVersion(u32),
    #[error("codec error: {0}")]
    Codec(#[from] waypoint_codec::Error),
}
