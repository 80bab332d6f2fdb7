//! Human-approval records

use crate::codec::WireMessage;
use crate::wire::{self, append_message, append_string, read_bytes, read_string, read_tag, skip_field};

/// Request to approve a pending human-approval task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproveRequest {
    /// Execution the task belongs to (field 1)
    pub execution_id: String,
    /// Node awaiting approval (field 2)
    pub node_id: String,
    /// Identity of the approver (field 3)
    pub approver: String,
    /// Free-form approval comment (field 4)
    pub comment: String,
}

impl WireMessage for ApproveRequest {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.execution_id);
        append_string(buf, 2, &self.node_id);
        append_string(buf, 3, &self.approver);
        append_string(buf, 4, &self.comment);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.execution_id, data) = read_string(data)?,
                2 => (self.node_id, data) = read_string(data)?,
                3 => (self.approver, data) = read_string(data)?,
                4 => (self.comment, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// Request to reject a pending human-approval task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RejectRequest {
    /// Execution the task belongs to (field 1)
    pub execution_id: String,
    /// Node awaiting approval (field 2)
    pub node_id: String,
    /// Identity of the approver (field 3)
    pub approver: String,
    /// Reason for the rejection (field 4)
    pub reason: String,
}

impl WireMessage for RejectRequest {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.execution_id);
        append_string(buf, 2, &self.node_id);
        append_string(buf, 3, &self.approver);
        append_string(buf, 4, &self.reason);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.execution_id, data) = read_string(data)?,
                2 => (self.node_id, data) = read_string(data)?,
                3 => (self.approver, data) = read_string(data)?,
                4 => (self.reason, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// Request with no fields; encodes to zero bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmptyRequest;

impl WireMessage for EmptyRequest {
    fn encode_to(&self, _buf: &mut Vec<u8>) {}

    fn merge(&mut self, _data: &[u8]) -> wire::Result<()> {
        // tolerate any payload; there are no known fields to populate
        Ok(())
    }
}

/// One task currently blocked on human approval
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingApprovalItem {
    /// Execution the task belongs to (field 1)
    pub execution_id: String,
    /// Node awaiting approval (field 2)
    pub node_id: String,
    /// Owning workflow (field 3)
    pub workflow_id: String,
    /// When the task started waiting, RFC 3339 (field 4)
    pub started_at: String,
}

impl WireMessage for PendingApprovalItem {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        append_string(buf, 1, &self.execution_id);
        append_string(buf, 2, &self.node_id);
        append_string(buf, 3, &self.workflow_id);
        append_string(buf, 4, &self.started_at);
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => (self.execution_id, data) = read_string(data)?,
                2 => (self.node_id, data) = read_string(data)?,
                3 => (self.workflow_id, data) = read_string(data)?,
                4 => (self.started_at, data) = read_string(data)?,
                _ => data = skip_field(data, wire_type)?,
            }
        }
        Ok(())
    }
}

/// All tasks currently blocked on human approval
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingApprovalsResponse {
    /// Blocked tasks, in wire order (field 1, repeated)
    pub items: Vec<PendingApprovalItem>,
}

impl WireMessage for PendingApprovalsResponse {
    fn encode_to(&self, buf: &mut Vec<u8>) {
        for item in &self.items {
            append_message(buf, 1, item);
        }
    }

    fn merge(&mut self, mut data: &[u8]) -> wire::Result<()> {
        while !data.is_empty() {
            let (field, wire_type, rest) = read_tag(data)?;
            data = rest;
            match field {
                1 => {
                    let (bytes, rest) = read_bytes(data)?;
                    self.items.push(PendingApprovalItem::decode(bytes)?);
                    data = rest;
                }
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
    fn test_approve_roundtrip() {
        let original = ApproveRequest {
            execution_id: "exec-42".into(),
            node_id: "review".into(),
            approver: "ops@example.com".into(),
            comment: "looks good".into(),
        };
        assert_eq!(ApproveRequest::decode(&original.encode()).unwrap(), original);
    }

    #[test]
    fn test_reject_roundtrip() {
        let original = RejectRequest {
            execution_id: "exec-42".into(),
            node_id: "review".into(),
            approver: "ops@example.com".into(),
            reason: "budget exceeded".into(),
        };
        assert_eq!(RejectRequest::decode(&original.encode()).unwrap(), original);
    }

    #[test]
    fn test_empty_request_is_empty() {
        assert!(EmptyRequest.encode().is_empty());
        assert_eq!(EmptyRequest::decode(&[]).unwrap(), EmptyRequest);
    }

    #[test]
    fn test_pending_approvals_roundtrip() {
        let original = PendingApprovalsResponse {
            items: vec![
                PendingApprovalItem {
                    execution_id: "exec-1".into(),
                    node_id: "gate".into(),
                    workflow_id: "deploy".into(),
                    started_at: "2026-08-29T12:00:00Z".into(),
                },
                PendingApprovalItem {
                    execution_id: "exec-2".into(),
                    ..Default::default()
                },
            ],
        };
        let decoded = PendingApprovalsResponse::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }
}
