//! Record schemas for the Loom orchestrator service
//!
//! The schema catalog is fixed and small, so every encode/decode pair is
//! written by hand against [`crate::wire`] instead of being generated.
//! Field numbers are part of each schema's stable identity: renumbering is
//! a breaking protocol change, while adding new numbers is safe because
//! decoders skip what they do not know.

mod approvals;
mod executions;
mod versions;
mod workflow;

pub use approvals::{
    ApproveRequest, EmptyRequest, PendingApprovalItem, PendingApprovalsResponse, RejectRequest,
};
pub use executions::{CancelRequest, ExecutionSummary, ListRequest, ListResponse};
pub use versions::{ListVersionsRequest, ListVersionsResponse, VersionInfo};
pub use workflow::{AckResponse, WorkflowIr};
