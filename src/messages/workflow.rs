//! Workflow registration records

use crate::codec::WireMessage;
use crate::wire::{self, append_bool, append_string, read_bool, read_string, read_tag, skip_field};

/// A workflow's intermediate representation, submitted at registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkflowIr {
    /// Workflow identifier (field 1)
    pub workflow_id: String,
    /// Content hash of this version (field 2)
    pub version_hash: String,
    /// Serialized IR document (field 3)
    pub ir_json: String,
}

impl WireMessage for WorkflowIr {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.workflow_id);
        append_string(buf, 2, &self.version_hash);
        append_string(buf, 3, &self.ir_json);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.workflow_id, data) = read_string(data)?,
                2 => (self.version_hash, data) = read_string(data)?,
                3 => (self.ir_json, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// Generic acknowledgement returned by mutating calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AckResponse {
    /// Whether the call took effect (field 1)
    pub ok: bool,
    /// Version-compatibility verdict, when applicable (field 2)
    pub compatibility: String,
    /// Human-readable detail (field 3)
    pub message: String,
}

impl WireMessage for AckResponse {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_bool(buf, 1, self.ok);
        append_string(buf, 2, &self.compatibility);
        append_string(buf, 3, &self.message);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.ok, data) = read_bool(data)?,
                2 => (self.compatibility, data) = read_string(data)?,
                3 => (self.message, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_ir_roundtrip() {
        let original = WorkflowIr {
            workflow_id: "etl-nightly".into(),
            version_hash: "a1b2c3".into(),
            ir_json: r#"{"nodes":[]}"#.into(),
        };
        let decoded = WorkflowIr::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_ack_roundtrip() {
        let original = AckResponse {
            ok: true,
            compatibility: "COMPATIBLE".into(),
            message: "registered".into(),
        };
        let decoded = AckResponse::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_default_encodes_to_nothing() {
        assert!(WorkflowIr::default().encode().is_empty());
        assert!(AckResponse::default().encode().is_empty());
    }

    #[test]
    fn test_ack_false_is_absent_on_wire() {
        let ack = AckResponse {
            message: "rejected".into(),
            ..Default::default()
        };
        let bytes = ack.encode();
        // only field 3 present
        assert_eq!(bytes[0], 0x1A);
        let decoded = AckResponse::decode(&bytes).unwrap();
        assert!(!decoded.ok);
    }
}
