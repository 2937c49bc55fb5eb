//! Codec implementations for the types record fields are built from.

pub mod bytes;
pub mod integer;
pub mod optional;
pub mod string;
pub mod vec;
