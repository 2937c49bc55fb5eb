//! Text fields.
//!
//! A string is its UTF-8 byte length (varint) followed by the bytes. The length is checked
//! against the [RangeCfg] before anything is copied, and the bytes must be valid UTF-8.

use crate::{
    util::{at_least, len_size, read_len, write_len},
    EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut};

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        buf.put_slice(self.as_bytes());
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        len_size(self.len()) + self.len()
    }
}

impl Read for String {
    type Cfg = RangeCfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &RangeCfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        let mut raw = vec![0; len];
        buf.copy_to_slice(&mut raw);
        String::from_utf8(raw).map_err(|_| Error::Invalid("String", "invalid utf-8"))
    }
}
