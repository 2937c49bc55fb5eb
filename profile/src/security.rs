//! Classify how well a profile protects the traffic it carries.

use crate::{
    records::{StreamSecurity, Tls},
    Profile,
};
use std::net::IpAddr;

/// Traffic is readable by anyone on the path.
const NOT_ENCRYPTED: &str = "traffic is not encrypted";
/// The server certificate is not verified.
const UNVERIFIED_CERTIFICATE: &str = "server certificate is not verified";
/// Shadowsocks without AEAD.
const STREAM_CIPHER: &str = "stream ciphers are not authenticated";
/// VMess with a non-zero alter id.
const MD5_AUTH: &str = "legacy MD5 authentication is enabled";
/// 0-RTT data can be replayed.
const ZERO_RTT: &str = "0-RTT data can be replayed";
const HYSTERIA_LEGACY: &str = "Hysteria v1 is deprecated";
const SHADOWTLS_LEGACY: &str = "ShadowTLS before v3 is deprecated";

/// Outcome of [Profile::security].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Security {
    /// The server is on this host.
    Local,
    /// Traffic can be observed or tampered with.
    Insecure(&'static str),
    /// The protocol revision is superseded.
    Deprecated(&'static str),
    Secure,
}

fn skips_verification(tls: &Option<Tls>) -> bool {
    tls.as_ref().is_some_and(|tls| tls.allow_insecure)
}

fn is_tls(security: Option<StreamSecurity>) -> bool {
    security.is_some_and(StreamSecurity::is_tls)
}

/// IP literals in `127.0.0.0/8` or starting with `::`.
fn is_local(address: &str) -> bool {
    match address.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => ip.octets()[0] == 127,
        Ok(IpAddr::V6(_)) => address.starts_with("::"),
        Err(_) => false,
    }
}

impl Profile {
    /// Classifies the protection this profile offers.
    ///
    /// Internal profiles (see [Profile::is_internal]) are always [Security::Secure].
    pub fn security(&self) -> Security {
        if self.server_address().is_some_and(is_local) {
            return Security::Local;
        }
        match self {
            Profile::Shadowsocks(p) => {
                let plugin = p.plugin.as_deref().unwrap_or_default();
                let method = p.method.as_deref().unwrap_or_default();
                let obfuscated = !plugin.trim().is_empty() && !plugin.starts_with("obfs-local;");
                let aead = method.contains("gcm") || method.contains("poly1305");
                if !obfuscated && !aead {
                    return Security::Insecure(STREAM_CIPHER);
                }
            }
            Profile::Http(p) => {
                if !is_tls(p.security) {
                    return Security::Insecure(NOT_ENCRYPTED);
                }
            }
            Profile::Socks(_) => return Security::Insecure(NOT_ENCRYPTED),
            Profile::VMess(p) => {
                if p.alter_id.unwrap_or_default() > 0 {
                    return Security::Insecure(MD5_AUTH);
                }
                let plaintext = p.is_vless == Some(true)
                    || matches!(p.encryption.as_deref(), Some("none" | "zero"));
                if plaintext && !is_tls(p.security) {
                    return Security::Insecure(NOT_ENCRYPTED);
                }
                if skips_verification(&p.tls) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
            }
            Profile::Trojan(p) => {
                if !is_tls(p.security) {
                    return Security::Insecure(NOT_ENCRYPTED);
                }
                if skips_verification(&p.tls) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
            }
            Profile::Hysteria(p) => {
                if skips_verification(&p.tls) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
                if p.protocol_version.unwrap_or(2) < 2 {
                    return Security::Deprecated(HYSTERIA_LEGACY);
                }
            }
            Profile::Tuic(p) => {
                if skips_verification(&p.tls) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
                if p.zero_rtt == Some(true) {
                    return Security::Insecure(ZERO_RTT);
                }
            }
            Profile::ShadowTls(p) => {
                if skips_verification(&p.tls) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
                if p.protocol_version.unwrap_or(3) < 3 {
                    return Security::Deprecated(SHADOWTLS_LEGACY);
                }
            }
            Profile::Juicity(p) => {
                if p.allow_insecure == Some(true) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
            }
            Profile::AnyTls(p) => {
                if skips_verification(&p.tls) {
                    return Security::Insecure(UNVERIFIED_CERTIFICATE);
                }
            }
            Profile::ShadowQuic(p) => {
                if p.zero_rtt == Some(true) {
                    return Security::Insecure(ZERO_RTT);
                }
            }
            _ => {}
        }
        Security::Secure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        records::{AnyTls, Hysteria, Shadowsocks, ShadowTls, Socks, Trojan, Tuic, VMess},
        Kind, Record,
    };
    use test_case::test_case;

    const REMOTE: &str = "203.0.113.7";

    fn remote<R: Record + Into<Profile>>(mut record: R) -> Profile {
        record.fill_defaults();
        let mut profile: Profile = record.into();
        set_address(&mut profile, REMOTE);
        profile
    }

    fn set_address(profile: &mut Profile, address: &str) {
        let slot = match profile {
            Profile::Socks(p) => &mut p.server_address,
            Profile::Shadowsocks(p) => &mut p.server_address,
            Profile::VMess(p) => &mut p.server_address,
            Profile::Trojan(p) => &mut p.server_address,
            Profile::Hysteria(p) => &mut p.server_address,
            Profile::Tuic(p) => &mut p.server_address,
            Profile::ShadowTls(p) => &mut p.server_address,
            Profile::AnyTls(p) => &mut p.server_address,
            _ => return,
        };
        *slot = Some(address.into());
    }

    fn insecure_tls() -> Option<Tls> {
        Some(Tls {
            allow_insecure: true,
            ..Default::default()
        })
    }

    #[test_case("127.0.0.1"; "loopback v4")]
    #[test_case("::1"; "loopback v6")]
    #[test_case("127.8.8.8"; "loopback v4 range")]
    #[test_case("::"; "unspecified v6")]
    #[test_case("::ffff:127.0.0.1"; "mapped v6")]
    fn test_local(address: &str) {
        let mut profile = remote(Socks::default());
        set_address(&mut profile, address);
        assert_eq!(profile.security(), Security::Local);
    }

    #[test_case("0.0.0.0"; "unspecified v4")]
    #[test_case("128.0.0.1"; "public v4")]
    #[test_case("fe80::1"; "link local v6")]
    fn test_not_local(address: &str) {
        let mut profile = remote(Socks::default());
        set_address(&mut profile, address);
        assert_eq!(profile.security(), Security::Insecure(NOT_ENCRYPTED));
    }

    #[test]
    fn test_default_address_is_local() {
        let mut trojan = Profile::new(Kind::Trojan);
        trojan.fill_defaults();
        assert_eq!(trojan.security(), Security::Local);
    }

    #[test]
    fn test_hostname_is_not_local() {
        let mut profile = remote(Socks::default());
        set_address(&mut profile, "localhost.example.com");
        assert_eq!(profile.security(), Security::Insecure(NOT_ENCRYPTED));
    }

    #[test_case("aes-256-gcm", "", Security::Secure; "aead")]
    #[test_case("chacha20-ietf-poly1305", "", Security::Secure; "poly1305")]
    #[test_case("aes-256-cfb", "", Security::Insecure(STREAM_CIPHER); "stream cipher")]
    #[test_case("rc4-md5", "obfs-local;obfs=http", Security::Insecure(STREAM_CIPHER); "simple obfs")]
    #[test_case("rc4-md5", "v2ray-plugin;tls", Security::Secure; "tls plugin")]
    fn test_shadowsocks(method: &str, plugin: &str, expected: Security) {
        let profile = remote(Shadowsocks {
            method: Some(method.into()),
            plugin: Some(plugin.into()),
            ..Default::default()
        });
        assert_eq!(profile.security(), expected);
    }

    #[test]
    fn test_vmess() {
        let md5 = remote(VMess {
            alter_id: Some(64),
            ..Default::default()
        });
        assert_eq!(md5.security(), Security::Insecure(MD5_AUTH));

        let vless = remote(VMess {
            is_vless: Some(true),
            ..Default::default()
        });
        assert_eq!(vless.security(), Security::Insecure(NOT_ENCRYPTED));

        let vless_tls = remote(VMess {
            is_vless: Some(true),
            security: Some(StreamSecurity::Tls),
            ..Default::default()
        });
        assert_eq!(vless_tls.security(), Security::Secure);

        let unverified = remote(VMess {
            tls: insecure_tls(),
            ..Default::default()
        });
        assert_eq!(unverified.security(), Security::Insecure(UNVERIFIED_CERTIFICATE));
    }

    #[test]
    fn test_trojan() {
        assert_eq!(remote(Trojan::default()).security(), Security::Secure);

        let plain = remote(Trojan {
            security: Some(StreamSecurity::None),
            ..Default::default()
        });
        assert_eq!(plain.security(), Security::Insecure(NOT_ENCRYPTED));

        let unverified = remote(Trojan {
            tls: insecure_tls(),
            ..Default::default()
        });
        assert_eq!(unverified.security(), Security::Insecure(UNVERIFIED_CERTIFICATE));
    }

    #[test]
    fn test_deprecated() {
        let hysteria = remote(Hysteria {
            protocol_version: Some(1),
            ..Default::default()
        });
        assert_eq!(hysteria.security(), Security::Deprecated(HYSTERIA_LEGACY));

        let shadowtls = remote(ShadowTls {
            protocol_version: Some(2),
            ..Default::default()
        });
        assert_eq!(shadowtls.security(), Security::Deprecated(SHADOWTLS_LEGACY));

        // Skipping verification outranks the deprecation.
        let both = remote(ShadowTls {
            protocol_version: Some(2),
            tls: insecure_tls(),
            ..Default::default()
        });
        assert_eq!(both.security(), Security::Insecure(UNVERIFIED_CERTIFICATE));
    }

    #[test]
    fn test_zero_rtt() {
        let tuic = remote(Tuic {
            zero_rtt: Some(true),
            ..Default::default()
        });
        assert_eq!(tuic.security(), Security::Insecure(ZERO_RTT));
        assert_eq!(remote(AnyTls::default()).security(), Security::Secure);
    }

    #[test]
    fn test_internal_is_secure() {
        for kind in Kind::ALL {
            let mut profile = Profile::new(kind);
            profile.fill_defaults();
            if profile.is_internal() {
                assert_eq!(profile.security(), Security::Secure);
            }
        }
    }
}
