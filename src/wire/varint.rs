//! Base-128 varint encoding
//!
//! Unsigned little-endian varints: 7 value bits per byte, high bit set on
//! every byte except the last. A `u64` needs at most 10 bytes.

use super::MAX_VARINT_LEN;
use super::error::{DecodeError, Result};

/// Append `value` to `buf` as an unsigned varint
pub fn put_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Number of bytes `put_uvarint` would write for `value`
#[must_use]
pub const fn uvarint_len(value: u64) -> usize {
    // bits needed, rounded up to whole 7-bit groups; zero still takes a byte
    match value {
        0 => 1,
        v => (64 - v.leading_zeros() as usize).div_ceil(7),
    }
}

/// Read an unsigned varint from the front of `buf`
///
/// Returns the value and the unconsumed remainder of the slice.
pub fn read_uvarint(buf: &[u8]) -> Result<(u64, &[u8])> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN {
            return Err(DecodeError::VarintOverflow);
        }
        // the tenth byte may only carry the top bit of a u64
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(DecodeError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, &buf[i + 1..]));
        }
    }
    Err(DecodeError::TruncatedVarint)
}
