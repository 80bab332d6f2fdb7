//! Wire-format decode errors

use thiserror::Error;

/// Errors produced while decoding a wire-format buffer
///
/// Any of these aborts the decode of the whole message; there is no
/// per-field recovery. Encoding never fails.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Value extends past the end of the buffer
    #[error("truncated input: need {needed} bytes, got {got}")]
    Truncated {
        /// Bytes the value claims to occupy
        needed: usize,
        /// Bytes actually remaining
        got: usize,
    },

    /// Input ended inside a varint
    #[error("truncated varint: input ended before the terminating byte")]
    TruncatedVarint,

    /// Varint does not fit in 64 bits
    #[error("varint overflows 64 bits")]
    VarintOverflow,

    /// Tag decoded to a field number outside the valid range
    #[error("invalid field number {number}")]
    InvalidFieldNumber {
        /// The out-of-range number
        number: u64,
    },

    /// Wire type this codec cannot frame (legacy groups, reserved values)
    #[error("unsupported wire type {wire_type}")]
    UnsupportedWireType {
        /// The raw wire-type bits
        wire_type: u8,
    },

    /// String field payload is not valid UTF-8
    #[error("invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for wire-format decoding
pub type Result<T> = std::result::Result<T, DecodeError>;
