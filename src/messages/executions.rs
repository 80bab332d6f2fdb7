//! Execution listing and cancellation records

use crate::codec::WireMessage;
use crate::wire::{
    self, append_int32, append_message, append_string, read_bytes, read_int32, read_string,
    read_tag, skip_field,
};

/// Filtered query over executions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListRequest {
    /// Restrict to one workflow; empty means all (field 1)
    pub workflow_id: String,
    /// Restrict to one status; empty means all (field 2)
    pub status: String,
    /// Maximum rows to return; zero means server default (field 3)
    pub limit: i32,
}

impl WireMessage for ListRequest {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.workflow_id);
        append_string(buf, 2, &self.status);
        append_int32(buf, 3, self.limit);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.workflow_id, data) = read_string(data)?,
                2 => (self.status, data) = read_string(data)?,
                3 => (self.limit, data) = read_int32(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// One row of the execution listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionSummary {
    /// Execution identifier (field 1)
    pub execution_id: String,
    /// Owning workflow (field 2)
    pub workflow_id: String,
    /// Workflow version this execution runs (field 3)
    pub version_hash: String,
    /// Current status (field 4)
    pub status: String,
    /// Creation timestamp, RFC 3339 (field 5)
    pub created_at: String,
}

impl WireMessage for ExecutionSummary {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.execution_id);
        append_string(buf, 2, &self.workflow_id);
        append_string(buf, 3, &self.version_hash);
        append_string(buf, 4, &self.status);
        append_string(buf, 5, &self.created_at);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.execution_id, data) = read_string(data)?,
                2 => (self.workflow_id, data) = read_string(data)?,
                3 => (self.version_hash, data) = read_string(data)?,
                4 => (self.status, data) = read_string(data)?,
                5 => (self.created_at, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// Execution listing, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListResponse {
    /// Matching executions (field 1, repeated)
    pub executions: Vec<ExecutionSummary>,
}

impl WireMessage for ListResponse {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        for execution in &self.executions {
            append_message(buf, 1, execution);
        }
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => {
                    let (bytes, rest) = read_bytes(data)?;
                    self.executions.push(ExecutionSummary::decode(bytes)?);
                    data = rest;
                }
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// Request to cancel one execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CancelRequest {
    /// Execution to cancel (field 1)
    pub execution_id: String,
}

impl WireMessage for CancelRequest {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.execution_id);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.execution_id, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}
