//! Field tags
//!
//! A tag is a varint of `(field_number << 3) | wire_type`. The wire type
//! selects the framing rule for the bytes that follow; the field number
//! names the schema attribute.

use std::fmt;

use super::MAX_FIELD_NUMBER;
use super::error::{DecodeError, Result};
use super::varint::{put_uvarint, read_uvarint};

/// Framing discipline for an encoded field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Base-128 varint (bools, int32)
    Varint = 0,
    /// 8-byte little-endian value
    Fixed64 = 1,
    /// Varint length prefix followed by that many bytes (strings, sub-messages)
    LengthDelimited = 2,
    /// Legacy group start; never produced, rejected when skipped
    StartGroup = 3,
    /// Legacy group end; never produced, rejected when skipped
    EndGroup = 4,
    /// 4-byte little-endian value
    Fixed32 = 5,
}

impl WireType {
    /// Convert from the low three bits of a tag
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            3 => Some(Self::StartGroup),
            4 => Some(Self::EndGroup),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }

    /// Convert to the tag bit pattern
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Varint => "Varint",
            Self::Fixed64 => "Fixed64",
            Self::LengthDelimited => "LengthDelimited",
            Self::StartGroup => "StartGroup",
            Self::EndGroup => "EndGroup",
            Self::Fixed32 => "Fixed32",
        };
        write!(f, "{name}")
    }
}

/// Append the tag for (`field`, `wire_type`) to `buf`
pub fn append_tag(buf: &mut Vec<u8>, field: u32, wire_type: WireType) {
    debug_assert!(field >= 1 && field <= MAX_FIELD_NUMBER, "invalid field number");
    put_uvarint(buf, (u64::from(field) << 3) | u64::from(wire_type.as_u8()));
}

/// Read a tag from the front of `buf`
///
/// Returns the field number, the wire type, and the unconsumed remainder.
/// Field number zero and reserved wire-type bit patterns fail the decode.
pub fn read_tag(buf: &[u8]) -> Result<(u32, WireType, &[u8])> {
    let (raw, rest) = read_uvarint(buf)?;
    let number = raw >> 3;
    if number == 0 || number > u64::from(MAX_FIELD_NUMBER) {
        return Err(DecodeError::InvalidFieldNumber { number });
    }
    let bits = (raw & 0x7) as u8;
    let wire_type = WireType::from_u8(bits).ok_or(DecodeError::UnsupportedWireType {
        wire_type: bits,
    })?;
    Ok((number as u32, wire_type, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        let mut buf = Vec::new();
        append_tag(&mut buf, 1, WireType::LengthDelimited);
        assert_eq!(buf, [0x0A]);

        let (field, wire_type, rest) = read_tag(&buf).unwrap();
        assert_eq!(field, 1);
        assert_eq!(wire_type, WireType::LengthDelimited);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_large_field_number() {
        let mut buf = Vec::new();
        append_tag(&mut buf, MAX_FIELD_NUMBER, WireType::Varint);
        let (field, wire_type, _) = read_tag(&buf).unwrap();
        assert_eq!(field, MAX_FIELD_NUMBER);
        assert_eq!(wire_type, WireType::Varint);
    }

    #[test]
    fn test_field_number_zero_rejected() {
        // tag 0x02 = field 0, wire type 2
        assert!(matches!(
            read_tag(&[0x02]),
            Err(DecodeError::InvalidFieldNumber { number: 0 })
        ));
    }

    #[test]
    fn test_reserved_wire_type_rejected() {
        // tag = (1 << 3) | 6
        assert!(matches!(
            read_tag(&[0x0E]),
            Err(DecodeError::UnsupportedWireType { wire_type: 6 })
        ));
    }

    #[test]
    fn test_wire_type_bits_roundtrip() {
        for bits in 0..=5u8 {
            let wire_type = WireType::from_u8(bits).unwrap();
            assert_eq!(wire_type.as_u8(), bits);
        }
        assert!(WireType::from_u8(6).is_none());
        assert!(WireType::from_u8(7).is_none());
    }
}
