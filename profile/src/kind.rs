//! Stable identifiers for every profile kind.
//!
//! Identifiers are persisted next to each blob and are never renumbered. New kinds are appended
//! with a fresh identifier; the identifiers of removed kinds stay reserved forever (see
//! [Kind::RETIRED]).

use crate::{registry, Error};
use std::{fmt, str::FromStr};

/// The kind of a [crate::Profile].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum Kind {
    Socks = 0,
    Http = 1,
    Shadowsocks = 2,
    VMess = 4,
    Trojan = 6,
    Chain = 8,
    Naive = 9,
    Hysteria = 15,
    Ssh = 17,
    WireGuard = 18,
    ShadowTls = 19,
    Tuic = 20,
    Mieru = 21,
    Juicity = 22,
    Direct = 23,
    AnyTls = 24,
    ShadowQuic = 25,
    ProxySet = 26,
    Config = 998,
    Subscription = 1000,
}

impl Kind {
    /// Every kind, in registry order.
    pub const ALL: [Kind; 20] = [
        Kind::Socks,
        Kind::Http,
        Kind::Shadowsocks,
        Kind::VMess,
        Kind::Trojan,
        Kind::Chain,
        Kind::Naive,
        Kind::Hysteria,
        Kind::Ssh,
        Kind::WireGuard,
        Kind::ShadowTls,
        Kind::Tuic,
        Kind::Mieru,
        Kind::Juicity,
        Kind::Direct,
        Kind::AnyTls,
        Kind::ShadowQuic,
        Kind::ProxySet,
        Kind::Config,
        Kind::Subscription,
    ];

    /// Identifiers that belonged to kinds which no longer exist.
    ///
    /// Stored rows may still carry them, so they must never be reassigned.
    pub const RETIRED: [u32; 2] = [7, 999];

    /// Returns the persisted identifier.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Returns the position of this kind in [Kind::ALL] (and in the registry table).
    pub const fn index(self) -> usize {
        match self {
            Kind::Socks => 0,
            Kind::Http => 1,
            Kind::Shadowsocks => 2,
            Kind::VMess => 3,
            Kind::Trojan => 4,
            Kind::Chain => 5,
            Kind::Naive => 6,
            Kind::Hysteria => 7,
            Kind::Ssh => 8,
            Kind::WireGuard => 9,
            Kind::ShadowTls => 10,
            Kind::Tuic => 11,
            Kind::Mieru => 12,
            Kind::Juicity => 13,
            Kind::Direct => 14,
            Kind::AnyTls => 15,
            Kind::ShadowQuic => 16,
            Kind::ProxySet => 17,
            Kind::Config => 18,
            Kind::Subscription => 19,
        }
    }

    /// Returns the stable, lowercase name of this kind (used in share links).
    pub fn name(self) -> &'static str {
        registry::entry(self).name
    }
}

impl TryFrom<u32> for Kind {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or(Error::UnknownKind(id))
    }
}

impl From<Kind> for u32 {
    fn from(kind: Kind) -> Self {
        kind.id()
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        registry::lookup(name).ok_or_else(|| Error::UnknownKindName(name.to_string()))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test_case(0, Kind::Socks; "socks")]
    #[test_case(4, Kind::VMess; "vmess")]
    #[test_case(26, Kind::ProxySet; "proxy set")]
    #[test_case(998, Kind::Config; "config")]
    #[test_case(1000, Kind::Subscription; "subscription")]
    fn test_stable_ids(id: u32, kind: Kind) {
        assert_eq!(Kind::try_from(id).unwrap(), kind);
        assert_eq!(kind.id(), id);
    }

    #[test_case(7; "retired trojan-go")]
    #[test_case(999; "retired neko")]
    #[test_case(3; "never assigned")]
    #[test_case(u32::MAX; "max")]
    fn test_unknown_ids(id: u32) {
        assert!(matches!(Kind::try_from(id), Err(Error::UnknownKind(got)) if got == id));
    }

    #[test]
    fn test_ids_unique_and_not_retired() {
        let ids: HashSet<u32> = Kind::ALL.iter().map(|kind| kind.id()).collect();
        assert_eq!(ids.len(), Kind::ALL.len());
        for retired in Kind::RETIRED {
            assert!(!ids.contains(&retired));
        }
    }

    #[test]
    fn test_index_matches_all() {
        for (i, kind) in Kind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_names() {
        for kind in Kind::ALL {
            let name = kind.to_string();
            assert_eq!(name.parse::<Kind>().unwrap(), kind);
            assert_eq!(name, name.to_lowercase());
        }
        assert!(matches!(
            "trojan-go".parse::<Kind>(),
            Err(Error::UnknownKindName(name)) if name == "trojan-go"
        ));
    }
}
