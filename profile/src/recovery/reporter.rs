//! Sinks for the outcome of each decode.

use crate::{record::Progress, registry, Kind};
use tracing::{debug, warn};

/// Receives the outcome of every decode performed by a [super::Deserializer].
///
/// Decoding never fails, so this is the only place a partially recovered profile is visible.
pub trait Reporter: Send + Sync {
    /// Called once per decoded blob, before defaults are filled.
    fn report(&self, kind: Kind, progress: &Progress);
}

/// Logs recovered decodes with [tracing].
///
/// Stopped decodes are logged at `WARN`. Complete decodes of a blob written with another layout
/// version are logged at `DEBUG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, kind: Kind, progress: &Progress) {
        match progress {
            Progress::Complete { version, fields } => {
                let current = registry::entry(kind).version;
                if *version < current {
                    debug!(%kind, version, current, fields, "decoded older layout");
                } else if *version > current {
                    debug!(%kind, version, current, fields, "decoded newer layout");
                }
            }
            Progress::Stopped {
                version,
                fields,
                declared,
                error,
            } => {
                warn!(
                    %kind,
                    ?version,
                    fields,
                    declared,
                    %error,
                    "stopped decoding profile, remaining fields defaulted"
                );
            }
        }
    }
}

/// Discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _: Kind, _: &Progress) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, kind: Kind, progress: &Progress) {
        (**self).report(kind, progress);
    }
}

impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn report(&self, kind: Kind, progress: &Progress) {
        (**self).report(kind, progress);
    }
}
