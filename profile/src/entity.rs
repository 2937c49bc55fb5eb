//! The stored row wrapping a profile.
//!
//! # Format
//!
//! ```text
//! +---------+----+----------+------------+----+----+--------+------+------+---------+
//! | version | id | group_id | user_order | tx | rx | status | ping | uuid | error?  | ...
//! +---------+----+----------+------------+----+----+--------+------+------+---------+
//!
//! ... +-----------+-----------------------+-------+
//!     | kind (u32)| profile (len + bytes) | dirty |
//!     +-----------+-----------------------+-------+
//! ```
//!
//! Unlike profile blobs, the envelope is decoded strictly: it is written and read by the same
//! code, so any failure indicates corruption and is returned as an error. The nested profile
//! blob is still recovered field by field (see [crate::Deserializer::decode_entity]).

use crate::{field::Field, recovery::encode, Config, Error, Kind, Profile};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use waypoint_codec::{EncodeSize, FixedSize, RangeCfg, Read, ReadExt, UInt, Write};

/// Layout version of the envelope.
const VERSION: u32 = 0;

/// Result of the last reachability test of a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    Invalid,
    #[default]
    Initial,
    Available,
    Unreachable,
    Unavailable,
}

impl Status {
    /// Returns the persisted code.
    pub fn code(self) -> i8 {
        match self {
            Status::Invalid => -1,
            Status::Initial => 0,
            Status::Available => 1,
            Status::Unreachable => 2,
            Status::Unavailable => 3,
        }
    }
}

impl Write for Status {
    fn write(&self, buf: &mut impl BufMut) {
        self.code().write(buf);
    }
}

impl Read for Status {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, waypoint_codec::Error> {
        match i8::read(buf)? {
            -1 => Ok(Status::Invalid),
            0 => Ok(Status::Initial),
            1 => Ok(Status::Available),
            2 => Ok(Status::Unreachable),
            3 => Ok(Status::Unavailable),
            code => Err(waypoint_codec::Error::InvalidEnum(code as u8)),
        }
    }
}

impl FixedSize for Status {
    const SIZE: usize = i8::SIZE;
}

/// A stored profile with its bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: u64,
    pub group_id: u64,
    /// Position within the group.
    pub user_order: u64,
    /// Bytes sent through this profile.
    pub tx: u64,
    /// Bytes received through this profile.
    pub rx: u64,
    pub status: Status,
    /// Latency of the last successful test, in milliseconds.
    pub ping: i32,
    pub uuid: String,
    /// Error of the last failed test.
    pub error: Option<String>,
    /// Kind of the nested profile. Kept even when the profile is absent.
    pub kind: Kind,
    pub profile: Option<Profile>,
    /// Modified since the last time it was applied.
    pub dirty: bool,
}

impl Entity {
    /// Creates an entity holding `profile`.
    pub fn new(id: u64, group_id: u64, profile: Profile) -> Self {
        Self {
            id,
            group_id,
            user_order: 0,
            tx: 0,
            rx: 0,
            status: Status::Initial,
            ping: 0,
            uuid: String::new(),
            error: None,
            kind: profile.kind(),
            profile: Some(profile),
            dirty: false,
        }
    }

    fn profile_blob(&self) -> Bytes {
        debug_assert!(
            self.profile.as_ref().map_or(true, |p| p.kind() == self.kind),
            "profile kind does not match entity kind"
        );
        encode(self.profile.as_ref())
    }

    /// Writes the envelope and the nested profile.
    pub fn write(&self, buf: &mut impl BufMut) {
        self.write_with(&self.profile_blob(), buf);
    }

    /// Returns the number of bytes [Entity::write] produces.
    pub fn encode_size(&self) -> usize {
        self.size_with(&self.profile_blob())
    }

    /// Encodes the entity into a blob.
    pub fn encode(&self) -> Bytes {
        let blob = self.profile_blob();
        let len = self.size_with(&blob);
        let mut buf = BytesMut::with_capacity(len);
        self.write_with(&blob, &mut buf);
        debug_assert_eq!(buf.len(), len);
        buf.freeze()
    }

    fn write_with(&self, blob: &Bytes, buf: &mut impl BufMut) {
        UInt(VERSION).write(buf);
        self.id.write(buf);
        self.group_id.write(buf);
        self.user_order.write(buf);
        self.tx.write(buf);
        self.rx.write(buf);
        self.status.write(buf);
        self.ping.write(buf);
        self.uuid.write(buf);
        self.error.write(buf);
        self.kind.id().write(buf);
        blob.write(buf);
        self.dirty.write(buf);
    }

    fn size_with(&self, blob: &Bytes) -> usize {
        UInt(VERSION).encode_size()
            + self.id.encode_size()
            + self.group_id.encode_size()
            + self.user_order.encode_size()
            + self.tx.encode_size()
            + self.rx.encode_size()
            + self.status.encode_size()
            + self.ping.encode_size()
            + self.uuid.encode_size()
            + self.error.encode_size()
            + self.kind.id().encode_size()
            + blob.encode_size()
            + self.dirty.encode_size()
    }

    /// Reads the envelope, returning it (without a profile) along with the raw profile blob.
    pub(crate) fn read_envelope(
        buf: &mut impl Buf,
        cfg: &Config,
    ) -> Result<(Self, Bytes), Error> {
        let UInt(version) = UInt::<u32>::read(buf)?;
        if version > VERSION {
            return Err(Error::UnsupportedVersion(version));
        }
        let id = u64::read(buf)?;
        let group_id = u64::read(buf)?;
        let user_order = u64::read(buf)?;
        let tx = u64::read(buf)?;
        let rx = u64::read(buf)?;
        let status = Status::read(buf)?;
        let ping = i32::read(buf)?;
        let uuid = String::read_field(buf, cfg)?;
        let error = Option::<String>::read_field(buf, cfg)?;
        let kind = Kind::try_from(u32::read(buf)?)?;
        let blob = Bytes::read_cfg(buf, &RangeCfg::from(..))?;
        let dirty = bool::read(buf)?;
        let entity = Self {
            id,
            group_id,
            user_order,
            tx,
            rx,
            status,
            ping,
            uuid,
            error,
            kind,
            profile: None,
            dirty,
        };
        Ok((entity, blob))
    }
}
