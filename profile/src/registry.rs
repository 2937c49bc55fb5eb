//! The table from [Kind] to an empty [Profile] of that kind.
//!
//! The table is immutable and holds exactly one entry per [Kind], at [Kind::index]. Lookups are
//! therefore total and need no synchronization.

use crate::{record::Record, records::*, Kind, Profile};

/// One row of the registry.
#[derive(Debug)]
pub struct Entry {
    /// The kind this row describes.
    pub kind: Kind,
    /// Stable name of the kind.
    pub name: &'static str,
    /// Current layout version of the kind.
    pub version: u32,
    /// Creates an empty profile of the kind.
    pub create: fn() -> Profile,
}

fn empty<R: Record + Into<Profile>>() -> Profile {
    R::default().into()
}

macro_rules! entry {
    ($kind:ident, $name:literal, $ty:ty) => {
        Entry {
            kind: Kind::$kind,
            name: $name,
            version: <$ty as Record>::VERSION,
            create: empty::<$ty>,
        }
    };
}

/// Every registered kind, in [Kind::ALL] order.
pub static REGISTRY: [Entry; Kind::ALL.len()] = [
    entry!(Socks, "socks", Socks),
    entry!(Http, "http", Http),
    entry!(Shadowsocks, "shadowsocks", Shadowsocks),
    entry!(VMess, "vmess", VMess),
    entry!(Trojan, "trojan", Trojan),
    entry!(Chain, "chain", Chain),
    entry!(Naive, "naive", Naive),
    entry!(Hysteria, "hysteria", Hysteria),
    entry!(Ssh, "ssh", Ssh),
    entry!(WireGuard, "wireguard", WireGuard),
    entry!(ShadowTls, "shadowtls", ShadowTls),
    entry!(Tuic, "tuic", Tuic),
    entry!(Mieru, "mieru", Mieru),
    entry!(Juicity, "juicity", Juicity),
    entry!(Direct, "direct", Direct),
    entry!(AnyTls, "anytls", AnyTls),
    entry!(ShadowQuic, "shadowquic", ShadowQuic),
    entry!(ProxySet, "proxyset", ProxySet),
    entry!(Config, "config", Custom),
    entry!(Subscription, "subscription", Subscription),
];

/// Returns the entry for `kind`.
pub fn entry(kind: Kind) -> &'static Entry {
    &REGISTRY[kind.index()]
}

/// Creates an empty profile of `kind`.
pub fn create(kind: Kind) -> Profile {
    (entry(kind).create)()
}

/// Finds the kind registered under `name`.
pub fn lookup(name: &str) -> Option<Kind> {
    REGISTRY
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.kind)
}
