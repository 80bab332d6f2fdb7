//! Protobuf wire-format primitives
//!
//! This module provides the tag/varint/length-delimited framing layer that
//! the per-schema codecs in [`crate::messages`] are built from. Everything
//! here is a pure function over byte slices; readers hand back the decoded
//! value together with the unconsumed remainder of the input.

mod error;
mod reader;
mod tag;
mod varint;
mod writer;

pub use error::{DecodeError, Result};
pub use reader::{
    read_bool, read_bytes, read_fixed32, read_fixed64, read_int32, read_string, read_varint,
    skip_field,
};
pub use tag::{WireType, append_tag, read_tag};
pub use varint::{put_uvarint, read_uvarint, uvarint_len};
pub use writer::{append_bool, append_int32, append_message, append_string};

/// Maximum encoded length of a varint (64-bit value, 7 bits per byte)
pub const MAX_VARINT_LEN: usize = 10;

/// Highest field number a tag can carry (29 bits)
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;
