//! Record definitions for every profile kind.
//!
//! Records are grouped by family. Values shared by several families (credentials, TLS settings
//! and the small enumerations stored as one-byte tags) live here.

use crate::{
    field::{impl_plain_field, Field},
    Config,
};
use bytes::{Buf, BufMut};
use waypoint_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};

mod composite;
mod custom;
mod obfuscation;
mod plain;
mod quic;
mod subscription;
mod tls;

pub use composite::{Chain, ProxySet};
pub use custom::Custom;
pub use obfuscation::{Mieru, Shadowsocks, VMess};
pub use plain::{Direct, Http, Socks, Ssh};
pub use quic::{Hysteria, Juicity, ShadowQuic, Tuic, WireGuard};
pub use subscription::Subscription;
pub use tls::{AnyTls, Naive, ShadowTls, Trojan};

/// Default address of a new profile.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Declares an enumeration persisted as a one-byte tag.
///
/// Unknown tags fail with [Error::InvalidEnum].
macro_rules! tagged {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $tag:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in tag order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                let tag: u8 = match self {
                    $($name::$variant => $tag,)*
                };
                buf.put_u8(tag);
            }
        }

        impl Read for $name {
            type Cfg = ();

            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                match u8::read(buf)? {
                    $($tag => Ok($name::$variant),)*
                    tag => Err(Error::InvalidEnum(tag)),
                }
            }
        }

        impl FixedSize for $name {
            const SIZE: usize = 1;
        }

        impl_plain_field!($name);
    };
}

tagged! {
    /// SOCKS protocol revision.
    pub enum SocksVersion {
        V4 = 0,
        V4a = 1,
        V5 = 2,
    }
}

impl SocksVersion {
    /// Returns the protocol name shown to users.
    pub fn protocol_name(self) -> &'static str {
        match self {
            SocksVersion::V4 => "SOCKS4",
            SocksVersion::V4a => "SOCKS4A",
            SocksVersion::V5 => "SOCKS5",
        }
    }
}

tagged! {
    /// Security layer wrapping a stream transport.
    pub enum StreamSecurity {
        None = 0,
        Tls = 1,
        Reality = 2,
    }
}

impl StreamSecurity {
    /// Returns true if the stream is encrypted by TLS (or REALITY).
    pub fn is_tls(self) -> bool {
        !matches!(self, StreamSecurity::None)
    }
}

tagged! {
    /// Stream transport carrying a V2Ray-style protocol.
    pub enum Transport {
        Tcp = 0,
        WebSocket = 1,
        Http = 2,
        Grpc = 3,
        Quic = 4,
        HttpUpgrade = 5,
    }
}

tagged! {
    /// How an SSH profile authenticates.
    pub enum SshAuth {
        None = 0,
        Password = 1,
        PrivateKey = 2,
    }
}

tagged! {
    /// How a Hysteria profile authenticates.
    pub enum HysteriaAuth {
        None = 0,
        Base64 = 1,
        Text = 2,
    }
}

tagged! {
    /// The carrier protocol of a Hysteria (v1) profile.
    pub enum HysteriaProtocol {
        Udp = 0,
        FakeTcp = 1,
        WeChatVideo = 2,
    }
}

tagged! {
    /// How a proxy set picks its active member.
    pub enum SetManagement {
        Selector = 0,
        UrlTest = 1,
    }
}

tagged! {
    /// What the text of a custom profile contains.
    pub enum ConfigType {
        /// A single outbound object.
        Outbound = 0,
        /// A complete core configuration.
        Full = 1,
    }
}

/// A username and password pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Creates a new pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Write for Credentials {
    fn write(&self, buf: &mut impl BufMut) {
        self.username.write(buf);
        self.password.write(buf);
    }
}

impl EncodeSize for Credentials {
    fn encode_size(&self) -> usize {
        self.username.encode_size() + self.password.encode_size()
    }
}

impl Field for Credentials {
    fn read_field(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let username = String::read_field(buf, cfg)?;
        let password = String::read_field(buf, cfg)?;
        Ok(Self { username, password })
    }
}

/// TLS client settings shared by every TLS-capable record.
///
/// The block is stored as a single field: if any part of it cannot be read, the whole block
/// falls back to its default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tls {
    /// Server name indication. Empty means "use the server address".
    pub sni: String,
    /// Comma-separated ALPN protocols.
    pub alpn: String,
    /// PEM certificates to trust in addition to the system roots.
    pub certificates: String,
    /// Skip certificate verification.
    pub allow_insecure: bool,
    /// uTLS fingerprint to mimic. Empty disables uTLS.
    pub utls_fingerprint: String,
    /// Enable Encrypted Client Hello.
    pub ech: bool,
    /// ECH configuration list (base64).
    pub ech_config: String,
    /// Omit the SNI extension entirely.
    pub disable_sni: bool,
}

impl Write for Tls {
    fn write(&self, buf: &mut impl BufMut) {
        self.sni.write(buf);
        self.alpn.write(buf);
        self.certificates.write(buf);
        self.allow_insecure.write(buf);
        self.utls_fingerprint.write(buf);
        self.ech.write(buf);
        self.ech_config.write(buf);
        self.disable_sni.write(buf);
    }
}

impl EncodeSize for Tls {
    fn encode_size(&self) -> usize {
        self.sni.encode_size()
            + self.alpn.encode_size()
            + self.certificates.encode_size()
            + self.allow_insecure.encode_size()
            + self.utls_fingerprint.encode_size()
            + self.ech.encode_size()
            + self.ech_config.encode_size()
            + self.disable_sni.encode_size()
    }
}

impl Field for Tls {
    fn read_field(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        Ok(Self {
            sni: String::read_field(buf, cfg)?,
            alpn: String::read_field(buf, cfg)?,
            certificates: String::read_field(buf, cfg)?,
            allow_insecure: bool::read(buf)?,
            utls_fingerprint: String::read_field(buf, cfg)?,
            ech: bool::read(buf)?,
            ech_config: String::read_field(buf, cfg)?,
            disable_sni: bool::read(buf)?,
        })
    }
}
