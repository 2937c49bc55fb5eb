//! Lists.
//!
//! A list is its item count (varint) followed by the items. The count is checked against the
//! [RangeCfg] and never used to reserve more items than the buffer could still hold.

use crate::{EncodeSize, Error, RangeCfg, Read, Write};
use bytes::{Buf, BufMut};

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.len().write(buf);
        self.iter().for_each(|item| item.write(buf));
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        self.iter()
            .fold(self.len().encode_size(), |size, item| size + item.encode_size())
    }
}

impl<T: Read> Read for Vec<T> {
    /// Bounds on the count, and the config of each item.
    type Cfg = (RangeCfg, T::Cfg);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, (range, cfg): &Self::Cfg) -> Result<Self, Error> {
        let len = usize::read_cfg(buf, range)?;
        let mut items = Vec::with_capacity(len.min(buf.remaining()));
        for _ in 0..len {
            items.push(T::read_cfg(buf, cfg)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_ports() {
        let ports = vec![80u16, 443, 8443];
        let encoded = ports.encode();
        assert_eq!(&encoded[..], &[0x03, 0x00, 0x50, 0x01, 0xBB, 0x20, 0xFB]);
        assert_eq!(
            Vec::<u16>::decode_cfg(encoded.clone(), &(RangeCfg::at_most(3), ())),
            Ok(ports)
        );
        assert_eq!(
            Vec::<u16>::decode_cfg(encoded, &(RangeCfg::at_most(2), ())),
            Err(Error::InvalidLength(3))
        );
    }

    #[test]
    fn test_hosts() {
        let hosts = vec!["a.example".to_string(), String::new()];
        let encoded = hosts.encode();
        assert_eq!(encoded.len(), hosts.encode_size());
        let cfg = (RangeCfg::ANY, RangeCfg::at_most(16));
        assert_eq!(Vec::<String>::decode_cfg(encoded, &cfg), Ok(hosts));
    }

    #[test]
    fn test_huge_count() {
        // A count of u32::MAX with nothing behind it.
        let encoded = [0xFFu8, 0xFF, 0xFF, 0xFF, 0x0F];
        assert_eq!(
            Vec::<u64>::decode_cfg(&encoded[..], &(RangeCfg::ANY, ())),
            Err(Error::EndOfBuffer)
        );
    }
}
