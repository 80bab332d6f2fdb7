//! Field-consuming primitives
//!
//! Every reader takes the remaining buffer, decodes one value from its
//! front, and returns the value together with the unconsumed tail. A
//! malformed value fails the decode of the whole message; callers never
//! resume past an error.

use tracing::trace;

use super::error::{DecodeError, Result};
use super::tag::WireType;
use super::varint::read_uvarint;

/// Read a varint-framed value
pub fn read_varint(buf: &[u8]) -> Result<(u64, &[u8])> {
    read_uvarint(buf)
}

/// Read a varint-framed bool (any non-zero value is `true`)
pub fn read_bool(buf: &[u8]) -> Result<(bool, &[u8])> {
    let (value, rest) = read_uvarint(buf)?;
    Ok((value != 0, rest))
}

/// Read a varint-framed int32, truncating to the low 32 bits
pub fn read_int32(buf: &[u8]) -> Result<(i32, &[u8])> {
    let (value, rest) = read_uvarint(buf)?;
    Ok((value as u32 as i32, rest))
}

/// Read a 4-byte little-endian value
pub fn read_fixed32(buf: &[u8]) -> Result<(u32, &[u8])> {
    let Some((head, rest)) = buf.split_at_checked(4) else {
        return Err(DecodeError::Truncated {
            needed: 4,
            got: buf.len(),
        });
    };
    Ok((u32::from_le_bytes(head.try_into().unwrap()), rest))
}

/// Read an 8-byte little-endian value
pub fn read_fixed64(buf: &[u8]) -> Result<(u64, &[u8])> {
    let Some((head, rest)) = buf.split_at_checked(8) else {
        return Err(DecodeError::Truncated {
            needed: 8,
            got: buf.len(),
        });
    };
    Ok((u64::from_le_bytes(head.try_into().unwrap()), rest))
}

/// Read a length-delimited value: varint length prefix, then exactly that
/// many bytes
pub fn read_bytes(buf: &[u8]) -> Result<(&[u8], &[u8])> {
    let (declared, rest) = read_uvarint(buf)?;
    let needed = usize::try_from(declared).map_err(|_| DecodeError::Truncated {
        needed: usize::MAX,
        got: rest.len(),
    })?;
    let Some((value, rest)) = rest.split_at_checked(needed) else {
        return Err(DecodeError::Truncated {
            needed,
            got: rest.len(),
        });
    };
    Ok((value, rest))
}

/// Read a length-delimited UTF-8 string
pub fn read_string(buf: &[u8]) -> Result<(String, &[u8])> {
    let (bytes, rest) = read_bytes(buf)?;
    let value = String::from_utf8(bytes.to_vec())?;
    Ok((value, rest))
}

/// Consume and discard one field's value according to its wire type
///
/// This is the forward-compatibility path: a decoder that meets a field
/// number outside its schema skips the value and carries on. Legacy group
/// framing (wire types 3 and 4) has no length information to skip by, so it
/// fails the decode outright.
pub fn skip_field(buf: &[u8], wire_type: WireType) -> Result<&[u8]> {
    trace!(%wire_type, "skipping unknown field");
    match wire_type {
        WireType::Varint => read_uvarint(buf).map(|(_, rest)| rest),
        WireType::Fixed64 => read_fixed64(buf).map(|(_, rest)| rest),
        WireType::LengthDelimited => read_bytes(buf).map(|(_, rest)| rest),
        WireType::Fixed32 => read_fixed32(buf).map(|(_, rest)| rest),
        WireType::StartGroup | WireType::EndGroup => Err(DecodeError::UnsupportedWireType {
            wire_type: wire_type.as_u8(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bytes() {
        let buf = [0x03, b'a', b'b', b'c', 0xFF];
        let (value, rest) = read_bytes(&buf).unwrap();
        assert_eq!(value, b"abc");
        assert_eq!(rest, [0xFF]);
    }

    #[test]
    fn test_read_bytes_truncated() {
        // declares 5 bytes, only 2 follow
        let buf = [0x05, b'a', b'b'];
        assert!(matches!(
            read_bytes(&buf),
            Err(DecodeError::Truncated { needed: 5, got: 2 })
        ));
    }

    #[test]
    fn test_read_string_invalid_utf8() {
        let buf = [0x02, 0xC3, 0x28];
        assert!(matches!(
            read_string(&buf),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_read_int32_truncates_to_low_bits() {
        // -1 sign-extended to 64 bits on the wire
        let buf = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let (value, rest) = read_int32(&buf).unwrap();
        assert_eq!(value, -1);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_fixed_width_reads() {
        let buf = [0x01, 0x00, 0x00, 0x00, 0xAA];
        let (value, rest) = read_fixed32(&buf).unwrap();
        assert_eq!(value, 1);
        assert_eq!(rest, [0xAA]);

        assert!(matches!(
            read_fixed64(&buf),
            Err(DecodeError::Truncated { needed: 8, got: 5 })
        ));
    }

    #[test]
    fn test_skip_each_wire_type() {
        let rest = skip_field(&[0x96, 0x01, 0xAA], WireType::Varint).unwrap();
        assert_eq!(rest, [0xAA]);

        let rest = skip_field(&[0u8; 8], WireType::Fixed64).unwrap();
        assert!(rest.is_empty());

        let rest = skip_field(&[0x02, 0x01, 0x02, 0xAA], WireType::LengthDelimited).unwrap();
        assert_eq!(rest, [0xAA]);

        let rest = skip_field(&[0u8; 4], WireType::Fixed32).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn test_skip_group_fails_fast() {
        for wire_type in [WireType::StartGroup, WireType::EndGroup] {
            assert!(matches!(
                skip_field(&[0x00], wire_type),
                Err(DecodeError::UnsupportedWireType { .. })
            ));
        }
    }
}
