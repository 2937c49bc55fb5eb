//! Protocols that tunnel through (or imitate) a TLS connection.

use super::{StreamSecurity, Tls, Transport, DEFAULT_ADDRESS};
use crate::record::record;

record! {
    /// A Trojan server.
    pub struct Trojan {
        const KIND = Trojan;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        password: String = String::new();
        security: StreamSecurity = StreamSecurity::Tls;
        transport: Transport = Transport::Tcp;
        host: String = String::new();
        path: String = String::new();
        tls: Tls = Tls::default();
    }
}

record! {
    /// A NaïveProxy server.
    pub struct Naive {
        const KIND = Naive;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        username: String = String::new();
        password: String = String::new();
        /// Either `https` or `quic`.
        proto: String = "https".into();
        /// Extra request headers, one `Name: value` per line.
        extra_headers: String = String::new();
        sni: String = String::new();
        certificates: String = String::new();
        insecure_concurrency: u32 = 0;
        udp_over_tcp: bool = false;
    }
}

record! {
    /// A ShadowTLS server.
    pub struct ShadowTls {
        const KIND = ShadowTls;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        protocol_version: u32 = 3;
        password: String = String::new();
        tls: Tls = Tls::default();
    }
}

record! {
    /// An AnyTLS server.
    pub struct AnyTls {
        const KIND = AnyTls;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        password: String = String::new();
        /// Seconds between idle session checks.
        idle_session_check_interval: u32 = 30;
        /// Seconds before an idle session is closed.
        idle_session_timeout: u32 = 30;
        min_idle_session: u32 = 0;
        tls: Tls = Tls::default();
    }
}
