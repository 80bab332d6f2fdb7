//! Field-appending primitives
//!
//! Each writer is a total function: it either appends a complete
//! tag-plus-value encoding or, when the value equals its type's zero value,
//! appends nothing at all. Zero-value omission is what makes a fully
//! defaulted record encode to an empty byte sequence.

use crate::codec::WireMessage;

use super::tag::{WireType, append_tag};
use super::varint::put_uvarint;

/// Append a string field; empty strings are omitted
pub fn append_string(buf: &mut Vec<u8>, field: u32, value: &str) {
    if value.is_empty() {
        return;
    }
    append_tag(buf, field, WireType::LengthDelimited);
    put_uvarint(buf, value.len() as u64);
    buf.extend_from_slice(value.as_bytes());
}

/// Append a bool field; `false` is omitted
pub fn append_bool(buf: &mut Vec<u8>, field: u32, value: bool) {
    if !value {
        return;
    }
    append_tag(buf, field, WireType::Varint);
    put_uvarint(buf, 1);
}

/// Append an int32 field; zero is omitted
///
/// Negative values sign-extend to 64 bits before varint encoding, exactly
/// as standard protobuf `int32` does, so they always occupy ten bytes.
pub fn append_int32(buf: &mut Vec<u8>, field: u32, value: i32) {
    if value == 0 {
        return;
    }
    append_tag(buf, field, WireType::Varint);
    put_uvarint(buf, i64::from(value) as u64);
}

/// Append a nested record as a length-delimited sub-message
///
/// Repeated fields call this once per element under the same field number,
/// in sequence order. Presence is decided by the caller; an empty nested
/// record still writes its tag and a zero length.
pub fn append_message<M: WireMessage>(buf: &mut Vec<u8>, field: u32, message: &M) {
    let mut inner = Vec::new();
    message.encode_to(&mut inner);
    append_tag(buf, field, WireType::LengthDelimited);
    put_uvarint(buf, inner.len() as u64);
    buf.extend_from_slice(&inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_omitted() {
        let mut buf = Vec::new();
        append_string(&mut buf, 1, "");
        append_bool(&mut buf, 2, false);
        append_int32(&mut buf, 3, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_string_framing() {
        let mut buf = Vec::new();
        append_string(&mut buf, 1, "wf");
        assert_eq!(buf, [0x0A, 0x02, b'w', b'f']);
    }

    #[test]
    fn test_bool_framing() {
        let mut buf = Vec::new();
        append_bool(&mut buf, 1, true);
        assert_eq!(buf, [0x08, 0x01]);
    }

    #[test]
    fn test_int32_framing() {
        let mut buf = Vec::new();
        append_int32(&mut buf, 3, 150);
        assert_eq!(buf, [0x18, 0x96, 0x01]);
    }

    #[test]
    fn test_negative_int32_sign_extends() {
        let mut buf = Vec::new();
        append_int32(&mut buf, 1, -1);
        // one tag byte plus a full ten-byte varint
        assert_eq!(buf.len(), 11);
        assert_eq!(buf[0], 0x08);
        assert_eq!(&buf[1..], [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
    }
}
