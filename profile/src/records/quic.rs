//! Datagram-based protocols: the QUIC family and WireGuard.

use super::{HysteriaAuth, HysteriaProtocol, Tls, DEFAULT_ADDRESS};
use crate::record::record;

record! {
    /// A Hysteria (v1 or v2) server.
    pub struct Hysteria {
        const KIND = Hysteria;
        const VERSION = 1;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        /// Port list or ranges (for port hopping), such as `443` or `20000-30000,443`.
        server_ports: String = "443".into();
        protocol_version: u32 = 2;
        auth: HysteriaAuth = HysteriaAuth::None;
        auth_payload: String = String::new();
        obfuscation: String = String::new();
        /// Carrier of v1 connections. Ignored by v2.
        protocol: HysteriaProtocol = HysteriaProtocol::Udp;
        upload_mbps: u32 = 0;
        download_mbps: u32 = 0;
        stream_receive_window: u32 = 0;
        connection_receive_window: u32 = 0;
        disable_mtu_discovery: bool = false;
        tls: Tls = Tls::default();
        /// Seconds between port hops.
        hop_interval: u32 = 10, since 1;
    }
}

record! {
    /// A TUIC (v5) server.
    pub struct Tuic {
        const KIND = Tuic;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        uuid: String = String::new();
        token: String = String::new();
        congestion_controller: String = "cubic".into();
        udp_relay_mode: String = "native".into();
        zero_rtt: bool = false;
        tls: Tls = Tls::default();
    }
}

record! {
    /// A Juicity server.
    pub struct Juicity {
        const KIND = Juicity;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        uuid: String = String::new();
        password: String = String::new();
        /// SHA-256 of the certificate chain to pin. Empty disables pinning.
        pin_sha256: String = String::new();
        sni: String = String::new();
        allow_insecure: bool = false;
    }
}

record! {
    /// A Shadow QUIC server.
    pub struct ShadowQuic {
        const KIND = ShadowQuic;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        username: String = String::new();
        password: String = String::new();
        sni: String = String::new();
        alpn: String = String::new();
        congestion_control: String = "bbr".into();
        zero_rtt: bool = false;
        initial_mtu: u16 = 1300;
        minimum_mtu: u16 = 1290;
        udp_over_stream: bool = false;
    }
}

record! {
    /// A WireGuard peer.
    pub struct WireGuard {
        const KIND = WireGuard;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 51820;
        /// Interface addresses, one CIDR per line.
        local_address: String = String::new();
        private_key: String = String::new();
        peer_public_key: String = String::new();
        peer_pre_shared_key: String = String::new();
        mtu: u32 = 1420;
        /// Reserved header bytes, comma separated.
        reserved: String = String::new();
        listen_port: u16 = 0;
        persistent_keepalive: u32 = 0;
    }
}
