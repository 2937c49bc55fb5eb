//! Plain proxies and tunnels: SOCKS, HTTP, SSH and the direct outbound.

use super::{Credentials, SocksVersion, SshAuth, StreamSecurity, Tls, DEFAULT_ADDRESS};
use crate::record::record;

record! {
    /// A SOCKS4, SOCKS4a or SOCKS5 proxy.
    pub struct Socks {
        const KIND = Socks;
        const VERSION = 1;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 1080;
        protocol: SocksVersion = SocksVersion::V5;
        /// Absent for unauthenticated proxies.
        credentials: Credentials;
        /// Tunnel UDP through the TCP connection.
        udp_over_tcp: bool = false, since 1;
    }
}

record! {
    /// An HTTP proxy, optionally wrapped in TLS (HTTPS).
    pub struct Http {
        const KIND = Http;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        credentials: Credentials;
        /// Path prefix sent with CONNECT requests.
        path: String = String::new();
        security: StreamSecurity = StreamSecurity::None;
        tls: Tls = Tls::default();
    }
}

record! {
    /// An SSH tunnel.
    pub struct Ssh {
        const KIND = Ssh;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 22;
        username: String = "root".into();
        auth: SshAuth = SshAuth::None;
        password: String = String::new();
        /// PEM private key, used when `auth` is [SshAuth::PrivateKey].
        private_key: String = String::new();
        passphrase: String = String::new();
        /// Expected host keys, one per line. Empty accepts any key.
        public_key: String = String::new();
    }
}

record! {
    /// The direct (no proxy) outbound.
    pub struct Direct {
        const KIND = Direct;
        const VERSION = 0;

        name: String = String::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record::Progress, Config, Record};

    #[test]
    fn test_socks_without_credentials() {
        let socks = Socks {
            server_address: Some("proxy.example.com".into()),
            server_port: Some(1080),
            ..Default::default()
        };
        let mut decoded = Socks::default();
        let progress = decoded.read(&mut socks.encode(), &Config::default());
        assert!(progress.is_complete());
        decoded.fill_defaults();

        assert_eq!(decoded.server_address.as_deref(), Some("proxy.example.com"));
        assert_eq!(decoded.server_port, Some(1080));
        assert_eq!(decoded.credentials, None);
        assert_eq!(decoded.protocol, Some(SocksVersion::V5));
    }

    #[test]
    fn test_socks_v0_blob() {
        // Version 0 predates `udp_over_tcp`.
        let blob = [
            0x00, // version
            0x00, // name
            0x03, b'a', b'.', b'b', // server_address
            0x04, 0x38, // server_port
            0x00, // protocol
            0x01, 0x01, b'u', 0x01, b'p', // credentials
        ];
        let mut decoded = Socks::default();
        let progress = decoded.read(&mut &blob[..], &Config::default());
        assert_eq!(
            progress,
            Progress::Complete {
                version: 0,
                fields: 5
            }
        );
        assert_eq!(decoded.udp_over_tcp, None);
        assert_eq!(decoded.protocol, Some(SocksVersion::V4));
        assert_eq!(decoded.credentials, Some(Credentials::new("u", "p")));

        decoded.fill_defaults();
        assert_eq!(decoded.udp_over_tcp, Some(false));
    }

    #[test]
    fn test_ssh_defaults() {
        let mut ssh = Ssh::default();
        ssh.fill_defaults();
        assert_eq!(ssh.username.as_deref(), Some("root"));
        assert_eq!(ssh.server_port, Some(22));
        assert_eq!(ssh.auth, Some(SshAuth::None));
    }

    #[test]
    fn test_direct_layout() {
        let direct = Direct {
            name: Some("bypass".into()),
        };
        assert_eq!(&direct.encode()[..], b"\x00\x06bypass");
    }
}
