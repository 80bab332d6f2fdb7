//! Message codec trait
//!
//! [`WireMessage`] is the uniform serialize/deserialize capability a
//! transport needs to move any schema instance across the wire. Each record
//! in [`crate::messages`] implements it once; call sites pick the codec at
//! compile time through the trait bound, so there is no runtime codec
//! registry to populate or guard.

use bytes::Bytes;

use crate::wire::Result;

/// A record with a fixed wire schema
///
/// Implementations append fields in ascending field-number order, omitting
/// any field equal to its zero value, and decode with the shared loop:
/// read a tag, dispatch on field number, skip unknown numbers by wire type.
/// Scalar fields are last-occurrence-wins; repeated nested fields append in
/// wire order.
pub trait WireMessage: Default {
    /// Append this record's full encoding to `buf`
    ///
    /// Never fails; a fully zero-valued record appends nothing.
    fn encode_to(&self, buf: &mut Vec<u8>);

    /// Populate this instance from an encoded buffer
    ///
    /// Fields present in `data` overwrite (scalars) or extend (repeated
    /// sub-records) the current contents; absent fields are left untouched,
    /// which on a fresh instance means they keep their zero value.
    fn merge(&mut self, data: &[u8]) -> Result<()>;

    /// Encode into a freshly allocated buffer
    #[must_use]
    fn encode(&self) -> Bytes {
        let mut buf = Vec::new();
        self.encode_to(&mut buf);
        Bytes::from(buf)
    }

    /// Decode a fresh instance from an encoded buffer
    fn decode(data: &[u8]) -> Result<Self> {
        let mut message = Self::default();
        message.merge(data)?;
        Ok(message)
    }
}
