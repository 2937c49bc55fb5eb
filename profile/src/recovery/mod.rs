//! Decode stored blobs into profiles without ever failing the caller.
//!
//! Blobs outlive the code that wrote them: a row may have been written by an older release (with
//! fewer fields), by a newer one (with more), or have been cut short. [Deserializer] turns any of
//! these into a usable [Profile]:
//!
//! 1. An empty blob means "no profile" and yields `None` without constructing anything.
//! 2. Otherwise, the registry supplies an empty profile of the requested [Kind] and the blob is
//!    read into it. Reading stops at the first field that cannot be decoded; fields read before
//!    it keep their values.
//! 3. The outcome ([Progress]) is handed to the configured [Reporter].
//! 4. Every required field still unset receives its declared default.
//!
//! Only an unknown kind identifier is an error (see [Kind::try_from]), and it is raised before a
//! [Deserializer] is ever involved.
//!
//! # Example
//!
//! ```rust
//! use waypoint_profile::{encode, records::Socks, Deserializer, Kind, Profile};
//!
//! let socks = Socks {
//!     server_address: Some("proxy.example.com".into()),
//!     server_port: Some(1080),
//!     ..Default::default()
//! };
//! let blob = encode(Some(&Profile::from(socks)));
//!
//! // Drop the last byte: the profile is still recovered.
//! let deserializer = Deserializer::default();
//! let profile = deserializer.decode(Kind::Socks, &blob[..blob.len() - 1]).unwrap();
//! assert_eq!(profile.server_address(), Some("proxy.example.com"));
//!
//! // Nothing stored, nothing decoded.
//! assert!(deserializer.decode(Kind::Socks, &[]).is_none());
//! assert!(encode(None).is_empty());
//! ```

mod reporter;

pub use reporter::{NoopReporter, Reporter, TracingReporter};

use crate::{
    entity::Entity,
    record::{Progress, Record},
    registry, Error, Kind, Profile,
};
use bytes::Bytes;

/// Configuration for a [Deserializer].
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum length (in bytes) of any text field.
    pub max_text_len: usize,

    /// Maximum number of items in any list field.
    pub max_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_len: 1024 * 1024, // 1MB
            max_items: 4096,
        }
    }
}

/// Decodes blobs, recovering whatever a damaged or foreign-version blob still holds.
#[derive(Clone, Debug)]
pub struct Deserializer<R: Reporter = TracingReporter> {
    cfg: Config,
    reporter: R,
}

impl Default for Deserializer {
    fn default() -> Self {
        Self::new(Config::default(), TracingReporter)
    }
}

impl<R: Reporter> Deserializer<R> {
    /// Creates a deserializer that reports every decode to `reporter`.
    pub fn new(cfg: Config, reporter: R) -> Self {
        Self { cfg, reporter }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns the reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Decodes a blob stored for `kind`.
    ///
    /// Returns `None` if (and only if) the blob is empty.
    pub fn decode(&self, kind: Kind, blob: &[u8]) -> Option<Profile> {
        self.decode_with_progress(kind, blob)
            .map(|(profile, _)| profile)
    }

    /// Like [Deserializer::decode], also returning how far reading got.
    pub fn decode_with_progress(&self, kind: Kind, blob: &[u8]) -> Option<(Profile, Progress)> {
        if blob.is_empty() {
            return None;
        }
        let mut profile = registry::create(kind);
        let progress = profile.read(&mut &blob[..], &self.cfg);
        self.reporter.report(kind, &progress);
        profile.fill_defaults();
        Some((profile, progress))
    }

    /// Decodes a blob stored for the kind of `T`, returning the record directly.
    ///
    /// Returns `None` if (and only if) the blob is empty.
    pub fn decode_as<T: Record>(&self, blob: &[u8]) -> Option<T> {
        if blob.is_empty() {
            return None;
        }
        let mut record = T::default();
        let progress = record.read(&mut &blob[..], &self.cfg);
        self.reporter.report(T::KIND, &progress);
        record.fill_defaults();
        Some(record)
    }

    /// Decodes a stored [Entity].
    ///
    /// The envelope itself is decoded strictly: a damaged envelope or an unknown kind identifier
    /// is an error. The nested profile blob is decoded with [Deserializer::decode].
    pub fn decode_entity(&self, blob: &[u8]) -> Result<Entity, Error> {
        let (mut entity, profile) = Entity::read_envelope(&mut &blob[..], &self.cfg)?;
        entity.profile = self.decode(entity.kind, &profile);
        Ok(entity)
    }
}

/// Encodes a profile, or the empty blob when there is none.
pub fn encode(profile: Option<&Profile>) -> Bytes {
    match profile {
        Some(profile) => profile.encode(),
        None => Bytes::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Chain, Socks, Trojan};
    use std::sync::Mutex;
    use waypoint_codec::Error as CodecError;

    /// Collects every report.
    #[derive(Default)]
    struct Collector(Mutex<Vec<(Kind, Progress)>>);

    impl Reporter for Collector {
        fn report(&self, kind: Kind, progress: &Progress) {
            self.0.lock().unwrap().push((kind, progress.clone()));
        }
    }

    impl Collector {
        fn take(&self) -> Vec<(Kind, Progress)> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    fn deserializer() -> Deserializer<Collector> {
        Deserializer::new(Config::default(), Collector::default())
    }

    #[test]
    fn test_empty_blob_not_reported() {
        let deserializer = deserializer();
        for kind in Kind::ALL {
            assert!(deserializer.decode(kind, &[]).is_none());
        }
        assert!(deserializer.decode_as::<Socks>(&[]).is_none());
        assert!(deserializer.reporter().take().is_empty());
    }

    #[test]
    fn test_complete_decode_reported() {
        let deserializer = deserializer();
        let blob = encode(Some(&Profile::from(Chain::default())));
        let profile = deserializer.decode(Kind::Chain, &blob).unwrap();

        let mut expected = Chain::default();
        expected.fill_defaults();
        assert_eq!(profile, Profile::from(expected));
        assert_eq!(
            deserializer.reporter().take(),
            vec![(
                Kind::Chain,
                Progress::Complete {
                    version: 0,
                    fields: 2
                }
            )]
        );
    }

    #[test]
    fn test_truncated_decode_reported() {
        let deserializer = deserializer();
        let trojan = Trojan {
            password: Some("secret".into()),
            ..Default::default()
        };
        let blob = trojan.encode();
        assert!(blob.len() > 3);

        let trojan: Trojan = deserializer.decode_as(&blob[..3]).unwrap();
        assert_eq!(trojan.password.as_deref(), Some(""));
        assert_eq!(trojan.server_port, Some(443));

        let reports = deserializer.reporter().take();
        assert_eq!(reports.len(), 1);
        assert!(matches!(
            &reports[0],
            (
                Kind::Trojan,
                Progress::Stopped {
                    version: Some(0),
                    error: CodecError::EndOfBuffer,
                    ..
                }
            )
        ));
    }

    #[test]
    fn test_wrong_kind_still_yields_profile() {
        // A Chain blob read as Socks: whatever parses is kept, the rest is defaulted.
        let chain = Chain {
            name: Some("x".into()),
            proxies: Some(vec![1, 2, 3]),
        };
        let deserializer = Deserializer::new(Config::default(), NoopReporter);
        let profile = deserializer.decode(Kind::Socks, &chain.encode()).unwrap();
        assert_eq!(profile.kind(), Kind::Socks);
        assert_eq!(profile.name(), "x");
    }

    #[test]
    fn test_tracing_reporter() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        let deserializer = Deserializer::default();
        let blob = Socks::default().encode();
        assert!(deserializer.decode(Kind::Socks, &blob[..2]).is_some());
        assert!(deserializer.decode(Kind::Socks, &[0x00]).is_some());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_across_threads() {
        assert_send_sync::<Deserializer<TracingReporter>>();
        assert_send_sync::<Deserializer<NoopReporter>>();
        assert_send_sync::<Deserializer<std::sync::Arc<Collector>>>();

        let deserializer = Deserializer::new(Config::default(), NoopReporter);
        let deserializer = std::sync::Arc::new(deserializer);
        let blob = encode(Some(&Profile::from(Trojan::default())));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let deserializer = deserializer.clone();
                let blob = blob.clone();
                std::thread::spawn(move || deserializer.decode(Kind::Trojan, &blob))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().map(|p| p.kind()), Some(Kind::Trojan));
        }
    }
}
