//! A closed union over every record kind.

use crate::{
    record::{Progress, Record},
    records::*,
    registry, Config, Kind,
};
use bytes::{Buf, BufMut, Bytes};
use std::net::IpAddr;

/// Declares [Profile] and the dispatch from each variant to its record.
macro_rules! profiles {
    ($($variant:ident($ty:ty),)*) => {
        /// A profile of any kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Profile {
            $($variant($ty),)*
        }

        impl Profile {
            /// Returns the kind of this profile.
            pub fn kind(&self) -> Kind {
                match self {
                    $(Profile::$variant(_) => <$ty as Record>::KIND,)*
                }
            }

            /// Returns the layout version this profile is written with.
            pub fn version(&self) -> u32 {
                match self {
                    $(Profile::$variant(_) => <$ty as Record>::VERSION,)*
                }
            }

            /// Writes the version followed by every field.
            pub fn write(&self, buf: &mut impl BufMut) {
                match self {
                    $(Profile::$variant(record) => record.write(buf),)*
                }
            }

            /// Returns the number of bytes [Profile::write] produces.
            pub fn encode_size(&self) -> usize {
                match self {
                    $(Profile::$variant(record) => record.encode_size(),)*
                }
            }

            /// Encodes this profile into a blob.
            pub fn encode(&self) -> Bytes {
                match self {
                    $(Profile::$variant(record) => record.encode(),)*
                }
            }

            /// Reads a blob into this profile (see [Record::read]).
            pub fn read(&mut self, buf: &mut impl Buf, cfg: &Config) -> Progress {
                match self {
                    $(Profile::$variant(record) => record.read(buf, cfg),)*
                }
            }

            /// Assigns defaults to every unset required field (see [Record::fill_defaults]).
            pub fn fill_defaults(&mut self) {
                match self {
                    $(Profile::$variant(record) => record.fill_defaults(),)*
                }
            }
        }

        $(
            impl From<$ty> for Profile {
                fn from(record: $ty) -> Self {
                    Profile::$variant(record)
                }
            }

            impl TryFrom<Profile> for $ty {
                type Error = Profile;

                fn try_from(profile: Profile) -> Result<Self, Self::Error> {
                    match profile {
                        Profile::$variant(record) => Ok(record),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

profiles! {
    Socks(Socks),
    Http(Http),
    Shadowsocks(Shadowsocks),
    VMess(VMess),
    Trojan(Trojan),
    Chain(Chain),
    Naive(Naive),
    Hysteria(Hysteria),
    Ssh(Ssh),
    WireGuard(WireGuard),
    ShadowTls(ShadowTls),
    Tuic(Tuic),
    Mieru(Mieru),
    Juicity(Juicity),
    Direct(Direct),
    AnyTls(AnyTls),
    ShadowQuic(ShadowQuic),
    ProxySet(ProxySet),
    Config(Custom),
    Subscription(Subscription),
}

/// A reachability check a profile may support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Probe {
    /// ICMP echo to the server address.
    Icmp,
    /// TCP connect to the server port.
    Tcp,
    /// Forwarding a local port through the profile.
    Mapping,
}

fn text(slot: &Option<String>) -> &str {
    slot.as_deref().unwrap_or_default()
}

/// Formats `host:port`, bracketing IPv6 literals.
fn join_host_port(host: &str, port: impl std::fmt::Display) -> String {
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => format!("[{host}]:{port}"),
        _ => format!("{host}:{port}"),
    }
}

impl Profile {
    /// Creates an empty profile of `kind`.
    pub fn new(kind: Kind) -> Self {
        registry::create(kind)
    }

    /// Returns true if this profile has no server of its own (it selects or composes other
    /// profiles, embeds raw configuration, or is not a proxy at all).
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Profile::Chain(_)
                | Profile::ProxySet(_)
                | Profile::Config(_)
                | Profile::Direct(_)
                | Profile::Subscription(_)
        )
    }

    /// Returns the user-assigned name, if any.
    pub fn name(&self) -> &str {
        let slot = match self {
            Profile::Socks(p) => &p.name,
            Profile::Http(p) => &p.name,
            Profile::Shadowsocks(p) => &p.name,
            Profile::VMess(p) => &p.name,
            Profile::Trojan(p) => &p.name,
            Profile::Chain(p) => &p.name,
            Profile::Naive(p) => &p.name,
            Profile::Hysteria(p) => &p.name,
            Profile::Ssh(p) => &p.name,
            Profile::WireGuard(p) => &p.name,
            Profile::ShadowTls(p) => &p.name,
            Profile::Tuic(p) => &p.name,
            Profile::Mieru(p) => &p.name,
            Profile::Juicity(p) => &p.name,
            Profile::Direct(p) => &p.name,
            Profile::AnyTls(p) => &p.name,
            Profile::ShadowQuic(p) => &p.name,
            Profile::ProxySet(p) => &p.name,
            Profile::Config(p) => &p.name,
            Profile::Subscription(_) => return "",
        };
        text(slot)
    }

    /// Returns the server address, for profiles that have one.
    pub fn server_address(&self) -> Option<&str> {
        let slot = match self {
            Profile::Socks(p) => &p.server_address,
            Profile::Http(p) => &p.server_address,
            Profile::Shadowsocks(p) => &p.server_address,
            Profile::VMess(p) => &p.server_address,
            Profile::Trojan(p) => &p.server_address,
            Profile::Naive(p) => &p.server_address,
            Profile::Hysteria(p) => &p.server_address,
            Profile::Ssh(p) => &p.server_address,
            Profile::WireGuard(p) => &p.server_address,
            Profile::ShadowTls(p) => &p.server_address,
            Profile::Tuic(p) => &p.server_address,
            Profile::Mieru(p) => &p.server_address,
            Profile::Juicity(p) => &p.server_address,
            Profile::AnyTls(p) => &p.server_address,
            Profile::ShadowQuic(p) => &p.server_address,
            Profile::Chain(_)
            | Profile::Direct(_)
            | Profile::ProxySet(_)
            | Profile::Config(_)
            | Profile::Subscription(_) => return None,
        };
        Some(text(slot))
    }

    fn server_port(&self) -> Option<u16> {
        match self {
            Profile::Socks(p) => p.server_port,
            Profile::Http(p) => p.server_port,
            Profile::Shadowsocks(p) => p.server_port,
            Profile::VMess(p) => p.server_port,
            Profile::Trojan(p) => p.server_port,
            Profile::Naive(p) => p.server_port,
            Profile::Ssh(p) => p.server_port,
            Profile::WireGuard(p) => p.server_port,
            Profile::ShadowTls(p) => p.server_port,
            Profile::Tuic(p) => p.server_port,
            Profile::Mieru(p) => p.server_port,
            Profile::Juicity(p) => p.server_port,
            Profile::AnyTls(p) => p.server_port,
            Profile::ShadowQuic(p) => p.server_port,
            _ => None,
        }
    }

    /// Returns `host:port` of the server, or an empty string for internal profiles.
    pub fn display_address(&self) -> String {
        let Some(host) = self.server_address() else {
            return String::new();
        };
        match self {
            Profile::Hysteria(p) => join_host_port(host, text(&p.server_ports)),
            _ => join_host_port(host, self.server_port().unwrap_or_default()),
        }
    }

    /// Returns the label shown for this profile: its name, or its address when unnamed.
    pub fn display_label(&self) -> String {
        if let Profile::Subscription(p) = self {
            return text(&p.link).to_string();
        }
        match self.name() {
            "" => self.display_address(),
            name => name.to_string(),
        }
    }

    /// Returns the protocol name shown for this profile.
    pub fn display_type(&self) -> String {
        match self {
            Profile::Socks(p) => p
                .protocol
                .unwrap_or(SocksVersion::V5)
                .protocol_name()
                .to_string(),
            Profile::Http(p) if p.security.is_some_and(StreamSecurity::is_tls) => {
                "HTTPS".to_string()
            }
            Profile::Http(_) => "HTTP".to_string(),
            Profile::Shadowsocks(_) => "Shadowsocks".to_string(),
            Profile::VMess(p) if p.is_vless == Some(true) => "VLESS".to_string(),
            Profile::VMess(_) => "VMess".to_string(),
            Profile::Trojan(_) => "Trojan".to_string(),
            Profile::Chain(_) => "Chain".to_string(),
            Profile::Naive(_) => "Naïve".to_string(),
            Profile::Hysteria(p) => format!("Hysteria{}", p.protocol_version.unwrap_or(2)),
            Profile::Ssh(_) => "SSH".to_string(),
            Profile::WireGuard(_) => "WireGuard".to_string(),
            Profile::ShadowTls(_) => "ShadowTLS".to_string(),
            Profile::Tuic(_) => "TUIC".to_string(),
            Profile::Mieru(_) => "Mieru".to_string(),
            Profile::Juicity(_) => "Juicity".to_string(),
            Profile::Direct(_) => "Direct".to_string(),
            Profile::AnyTls(_) => "AnyTLS".to_string(),
            Profile::ShadowQuic(_) => "Shadow QUIC".to_string(),
            Profile::ProxySet(p) => match p.management.unwrap_or(SetManagement::Selector) {
                SetManagement::Selector => "Selector".to_string(),
                SetManagement::UrlTest => "URLTest".to_string(),
            },
            Profile::Config(p) => match p.config_type.unwrap_or(ConfigType::Outbound) {
                ConfigType::Outbound => "Custom Outbound".to_string(),
                ConfigType::Full => "Custom Config".to_string(),
            },
            Profile::Subscription(_) => "Subscription".to_string(),
        }
    }

    /// Returns true if `probe` can be run against this profile.
    pub fn can_probe(&self, probe: Probe) -> bool {
        if self.is_internal() {
            return false;
        }
        match probe {
            Probe::Icmp | Probe::Mapping => true,
            // Datagram-only servers do not accept TCP connections.
            Probe::Tcp => !matches!(
                self,
                Profile::Hysteria(_)
                    | Profile::Tuic(_)
                    | Profile::Juicity(_)
                    | Profile::ShadowQuic(_)
                    | Profile::WireGuard(_)
            ),
        }
    }

    /// Returns true if this profile can be shared as a link.
    pub fn has_link(&self) -> bool {
        !matches!(
            self,
            Profile::Chain(_) | Profile::ProxySet(_) | Profile::Direct(_) | Profile::Subscription(_)
        )
    }

    /// Returns true if this profile has a link format understood by other clients.
    ///
    /// [Profile::Direct] has one even though it has no share link.
    pub fn has_standard_link(&self) -> bool {
        !matches!(
            self,
            Profile::Ssh(_)
                | Profile::WireGuard(_)
                | Profile::ShadowQuic(_)
                | Profile::ShadowTls(_)
                | Profile::ProxySet(_)
                | Profile::Chain(_)
                | Profile::Config(_)
                | Profile::Subscription(_)
        )
    }

    /// Returns true if this profile can only be served by an external plugin binary.
    pub fn requires_plugin(&self) -> bool {
        matches!(
            self,
            Profile::Mieru(_) | Profile::Naive(_) | Profile::Juicity(_) | Profile::ShadowQuic(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn filled(kind: Kind) -> Profile {
        let mut profile = Profile::new(kind);
        profile.fill_defaults();
        profile
    }

    #[test]
    fn test_kind_matches_registry() {
        for kind in Kind::ALL {
            assert_eq!(Profile::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_try_from() {
        let profile = Profile::from(Direct::default());
        assert!(Socks::try_from(profile.clone()).is_err());
        assert_eq!(Direct::try_from(profile).unwrap(), Direct::default());
    }

    #[test]
    fn test_display_label() {
        let mut socks = Socks {
            server_address: Some("proxy.example.com".into()),
            server_port: Some(1080),
            ..Default::default()
        };
        socks.fill_defaults();
        let profile = Profile::from(socks.clone());
        assert_eq!(profile.display_label(), "proxy.example.com:1080");

        socks.name = Some("office".into());
        assert_eq!(Profile::from(socks).display_label(), "office");
    }

    #[test]
    fn test_display_address_ipv6() {
        let mut hysteria = Hysteria {
            server_address: Some("2001:db8::1".into()),
            server_ports: Some("20000-30000".into()),
            ..Default::default()
        };
        hysteria.fill_defaults();
        assert_eq!(
            Profile::from(hysteria).display_address(),
            "[2001:db8::1]:20000-30000"
        );
        assert_eq!(filled(Kind::Chain).display_address(), "");
    }

    #[test_case(Kind::Socks, "SOCKS5"; "socks")]
    #[test_case(Kind::Http, "HTTP"; "http")]
    #[test_case(Kind::VMess, "VMess"; "vmess")]
    #[test_case(Kind::Hysteria, "Hysteria2"; "hysteria")]
    #[test_case(Kind::ShadowQuic, "Shadow QUIC"; "shadowquic")]
    #[test_case(Kind::ProxySet, "Selector"; "proxy set")]
    #[test_case(Kind::Config, "Custom Outbound"; "config")]
    fn test_display_type(kind: Kind, expected: &str) {
        assert_eq!(filled(kind).display_type(), expected);
    }

    #[test]
    fn test_display_type_variants() {
        let vless = VMess {
            is_vless: Some(true),
            ..Default::default()
        };
        assert_eq!(Profile::from(vless).display_type(), "VLESS");

        let https = Http {
            security: Some(StreamSecurity::Tls),
            ..Default::default()
        };
        assert_eq!(Profile::from(https).display_type(), "HTTPS");
    }

    #[test]
    fn test_probes() {
        for kind in Kind::ALL {
            let profile = filled(kind);
            if profile.is_internal() {
                assert!(!profile.can_probe(Probe::Icmp));
                assert!(!profile.can_probe(Probe::Tcp));
                assert!(!profile.can_probe(Probe::Mapping));
            } else {
                assert!(profile.can_probe(Probe::Icmp));
                assert!(profile.can_probe(Probe::Mapping));
            }
        }
        assert!(filled(Kind::Trojan).can_probe(Probe::Tcp));
        assert!(!filled(Kind::Tuic).can_probe(Probe::Tcp));
    }

    #[test]
    fn test_links() {
        assert!(filled(Kind::Socks).has_standard_link());
        assert!(filled(Kind::Ssh).has_link());
        assert!(!filled(Kind::Ssh).has_standard_link());
        assert!(!filled(Kind::Chain).has_link());
        assert!(!filled(Kind::Chain).has_standard_link());
        assert!(filled(Kind::Config).has_link());
        assert!(!filled(Kind::Config).has_standard_link());
        assert!(!filled(Kind::Direct).has_link());
        assert!(filled(Kind::Direct).has_standard_link());
        assert!(!filled(Kind::ProxySet).has_standard_link());
        assert!(!filled(Kind::Subscription).has_standard_link());
    }

    #[test]
    fn test_requires_plugin() {
        assert!(filled(Kind::Naive).requires_plugin());
        assert!(!filled(Kind::Trojan).requires_plugin());
    }
}
