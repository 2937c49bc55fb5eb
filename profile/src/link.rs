//! Share profiles as self-contained links.
//!
//! A link carries the kind name and the compressed profile blob:
//!
//! ```text
//! waypoint://<kind>?<base64url(zstd(blob))>
//! ```
//!
//! Links of the legacy form `waypoint://<kind>:<revision>:<base64url(blob)>` carry the blob
//! uncompressed and are still accepted. The revision is ignored.
//!
//! Parsing goes through a [Deserializer], so a link produced by an older or newer release is
//! recovered like any stored blob.

use crate::{recovery::Reporter, Deserializer, Kind, Profile};
use base64::{
    alphabet::URL_SAFE,
    engine::{
        general_purpose::URL_SAFE_NO_PAD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig,
    },
    Engine,
};
use thiserror::Error;
use zstd::bulk::{compress, decompress};

/// Prefix of every link.
pub const SCHEME: &str = "waypoint://";

/// Compression level applied to the blob.
const COMPRESSION_LEVEL: i32 = 3;

/// Decodes base64url with or without padding.
const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors that can occur when producing or parsing a link.
#[derive(Error, Debug)]
pub enum Error {
    #[error("link does not start with {SCHEME}")]
    InvalidScheme,
    #[error("link has no payload")]
    MissingPayload,
    #[error("unknown kind: {0}")]
    UnknownKind(String),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("compression failed")]
    CompressionFailed,
    #[error("decompression failed")]
    DecompressionFailed,
    #[error("link encodes no profile")]
    EmptyProfile,
}

/// Produces a link for `profile`.
pub fn to_link(profile: &Profile) -> Result<String, Error> {
    let blob = profile.encode();
    let compressed = compress(&blob, COMPRESSION_LEVEL).map_err(|_| Error::CompressionFailed)?;
    Ok(format!(
        "{SCHEME}{}?{}",
        profile.kind().name(),
        URL_SAFE_NO_PAD.encode(compressed)
    ))
}

/// Parses a link produced by [to_link], or a legacy uncompressed link.
///
/// The decompressed blob may be at most `max_text_len` (see [crate::Config]) bytes.
pub fn parse<R: Reporter>(deserializer: &Deserializer<R>, link: &str) -> Result<Profile, Error> {
    let rest = link.strip_prefix(SCHEME).ok_or(Error::InvalidScheme)?;
    let (name, payload, compressed) = match rest.split_once('?') {
        Some((name, payload)) => (name, payload, true),
        None => {
            let (name, rest) = rest.split_once(':').ok_or(Error::MissingPayload)?;
            let (_, payload) = rest.split_once(':').ok_or(Error::MissingPayload)?;
            (name, payload, false)
        }
    };
    let kind: Kind = name
        .parse()
        .map_err(|_| Error::UnknownKind(name.to_string()))?;
    let decoded = PAYLOAD.decode(payload)?;
    let blob = if compressed {
        decompress(&decoded, deserializer.config().max_text_len)
            .map_err(|_| Error::DecompressionFailed)?
    } else {
        decoded
    };
    deserializer.decode(kind, &blob).ok_or(Error::EmptyProfile)
}
