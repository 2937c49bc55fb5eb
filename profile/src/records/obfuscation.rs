//! Obfuscating stream protocols: Shadowsocks, VMess/VLESS and Mieru.

use super::{StreamSecurity, Tls, Transport, DEFAULT_ADDRESS};
use crate::record::record;

record! {
    /// A Shadowsocks server.
    pub struct Shadowsocks {
        const KIND = Shadowsocks;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 8388;
        method: String = "aes-256-gcm".into();
        password: String = String::new();
        /// SIP003 plugin, as `name;opt=value;...`. Empty for none.
        plugin: String = String::new();
        udp_over_tcp: bool = false;
    }
}

record! {
    /// A VMess or VLESS server.
    pub struct VMess {
        const KIND = VMess;
        const VERSION = 1;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        uuid: String = String::new();
        /// Non-zero enables legacy MD5 authentication (VMess only).
        alter_id: u32 = 0;
        encryption: String = "auto".into();
        is_vless: bool = false;
        /// VLESS flow control (for example `xtls-rprx-vision`).
        flow: String = String::new();
        transport: Transport = Transport::Tcp;
        host: String = String::new();
        path: String = String::new();
        security: StreamSecurity = StreamSecurity::None;
        tls: Tls = Tls::default();
        reality_public_key: String = String::new();
        reality_short_id: String = String::new();
        packet_encoding: String = String::new(), since 1;
    }
}

record! {
    /// A Mieru server.
    pub struct Mieru {
        const KIND = Mieru;
        const VERSION = 0;

        name: String = String::new();
        server_address: String = DEFAULT_ADDRESS.into();
        server_port: u16 = 443;
        /// Either `TCP` or `UDP`.
        protocol: String = "TCP".into();
        username: String = String::new();
        password: String = String::new();
        mtu: u32 = 1400;
        mux_number: u32 = 0;
    }
}
