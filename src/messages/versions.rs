//! Workflow version records

use crate::codec::WireMessage;
use crate::wire::{
    self, append_int32, append_message, append_string, read_bytes, read_int32, read_string,
    read_tag, skip_field,
};

/// Request for all registered versions of one workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListVersionsRequest {
    /// Workflow to inspect (field 1)
    pub workflow_id: String,
}

impl WireMessage for ListVersionsRequest {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.workflow_id);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.workflow_id, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// One registered workflow version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    /// Owning workflow (field 1)
    pub workflow_id: String,
    /// Content hash of the version (field 2)
    pub version_hash: String,
    /// Compatibility verdict against the previous version (field 3)
    pub compatibility: String,
    /// Registration timestamp, RFC 3339 (field 4)
    pub registered_at: String,
    /// Executions currently pinned to this version (field 5)
    pub active_executions: i32,
}

impl WireMessage for VersionInfo {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.workflow_id);
        append_string(buf, 2, &self.version_hash);
        append_string(buf, 3, &self.compatibility);
        append_string(buf, 4, &self.registered_at);
        append_int32(buf, 5, self.active_executions);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.workflow_id, data) = read_string(data)?,
                2 => (self.version_hash, data) = read_string(data)?,
                3 => (self.compatibility, data) = read_string(data)?,
                4 => (self.registered_at, data) = read_string(data)?,
                5 => (self.active_executions, data) = read_int32(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// Version listing, newest first as the server returns them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListVersionsResponse {
    /// Registered versions (field 1, repeated)
    pub versions: Vec<VersionInfo>,
}

impl WireMessage for ListVersionsResponse {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        for version in &self.versions {
            append_message(buf, 1, version);
        }
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => {
                    let (bytes, rest) = read_bytes(data)?;
                    self.versions.push(VersionInfo::decode(bytes)?);
                    data = rest;
                }
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}
