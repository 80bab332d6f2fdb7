//! Typed client stubs over a pluggable call transport
//!
//! The orchestrator service is consumed through a single generic primitive:
//! invoke a named method with an encoded request and get encoded response
//! bytes back. [`CallTransport`] is that boundary; connection setup,
//! deadlines, and retry policy all live behind it. [`LoomClient`] supplies
//! the codec side, one thin stub per service method.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::codec::WireMessage;
use crate::messages::{
    AckResponse, ApproveRequest, CancelRequest, EmptyRequest, ListRequest, ListResponse,
    ListVersionsRequest, ListVersionsResponse, PendingApprovalsResponse, RejectRequest, WorkflowIr,
};
use crate::wire::DecodeError;

/// Full method paths for the orchestrator service
pub mod methods {
    /// Register a workflow version from its IR
    pub const REGISTER_WORKFLOW: &str = "/loom.Orchestrator/RegisterWorkflow";
    /// List executions, optionally filtered
    pub const LIST_EXECUTIONS: &str = "/loom.Orchestrator/ListExecutions";
    /// Cancel a running execution
    pub const CANCEL_EXECUTION: &str = "/loom.Orchestrator/CancelExecution";
    /// List registered versions of a workflow
    pub const LIST_WORKFLOW_VERSIONS: &str = "/loom.Orchestrator/ListWorkflowVersions";
    /// Approve a pending human-approval task
    pub const APPROVE_TASK: &str = "/loom.Orchestrator/ApproveTask";
    /// Reject a pending human-approval task
    pub const REJECT_TASK: &str = "/loom.Orchestrator/RejectTask";
    /// List tasks blocked on human approval
    pub const GET_PENDING_APPROVALS: &str = "/loom.Orchestrator/GetPendingApprovals";
}

/// The call-invocation primitive this crate consumes
///
/// Implementations own the connection and its failure modes. The codec is
/// handed over by construction of [`LoomClient`], so no process-wide codec
/// registration exists or is needed.
pub trait CallTransport {
    /// Transport-level failure type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `request` to `method` and return the raw response bytes
    fn invoke(&mut self, method: &str, request: Bytes) -> Result<Bytes, Self::Error>;
}

/// A stub call failed
#[derive(Error, Debug)]
pub enum CallError<E: std::error::Error + 'static> {
    /// The transport could not complete the call
    #[error("{method} failed: {source}")]
    Transport {
        /// Method path of the failed call
        method: &'static str,
        /// Underlying transport error
        source: E,
    },

    /// The response bytes did not decode into the expected record
    #[error("{method} returned an undecodable response: {source}")]
    Response {
        /// Method path of the failed call
        method: &'static str,
        /// Underlying decode error
        source: DecodeError,
    },
}

/// Typed client for the Loom orchestrator service
#[derive(Debug)]
pub struct LoomClient<T> {
    transport: T,
}

impl<T: CallTransport> LoomClient<T> {
    /// Wrap a transport in the typed client
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Recover the underlying transport
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Register a workflow version from its IR
    pub fn register_workflow(
        &mut self,
        request: &WorkflowIr,
    ) -> Result<AckResponse, CallError<T::Error>> {
        self.call(methods::REGISTER_WORKFLOW, request)
    }

    /// List executions, optionally filtered by workflow and status
    pub fn list_executions(
        &mut self,
        request: &ListRequest,
    ) -> Result<ListResponse, CallError<T::Error>> {
        self.call(methods::LIST_EXECUTIONS, request)
    }

    /// Cancel a running execution
    pub fn cancel_execution(
        &mut self,
        request: &CancelRequest,
    ) -> Result<AckResponse, CallError<T::Error>> {
        self.call(methods::CANCEL_EXECUTION, request)
    }

    /// List registered versions of a workflow
    pub fn list_workflow_versions(
        &mut self,
        request: &ListVersionsRequest,
    ) -> Result<ListVersionsResponse, CallError<T::Error>> {
        self.call(methods::LIST_WORKFLOW_VERSIONS, request)
    }

    /// Approve a pending human-approval task
    pub fn approve_task(
        &mut self,
        request: &ApproveRequest,
    ) -> Result<AckResponse, CallError<T::Error>> {
        self.call(methods::APPROVE_TASK, request)
    }

    /// Reject a pending human-approval task
    pub fn reject_task(
        &mut self,
        request: &RejectRequest,
    ) -> Result<AckResponse, CallError<T::Error>> {
        self.call(methods::REJECT_TASK, request)
    }

    /// List all tasks currently blocked on human approval
    pub fn pending_approvals(&mut self) -> Result<PendingApprovalsResponse, CallError<T::Error>> {
        self.call(methods::GET_PENDING_APPROVALS, &EmptyRequest)
    }

    /// Shared encode, invoke, decode pass behind every stub
    fn call<Req, Resp>(
        &mut self,
        method: &'static str,
        request: &Req,
    ) -> Result<Resp, CallError<T::Error>>
    where
        Req: WireMessage,
        Resp: WireMessage,
    {
        let payload = request.encode();
        debug!(method, request_len = payload.len(), "invoking");
        let reply = self
            .transport
            .invoke(method, payload)
            .map_err(|source| CallError::Transport { method, source })?;
        debug!(method, response_len = reply.len(), "response received");
        Resp::decode(&reply).map_err(|source| CallError::Response { method, source })
    }
}
