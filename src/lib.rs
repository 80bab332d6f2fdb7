//! loomwire - wire codec and client stubs for the Loom workflow orchestrator
//!
//! This library implements the protobuf wire format for the fixed set of
//! record schemas the Loom orchestration service speaks, without a protoc
//! code-generation step. Encoding and decoding are hand-written against the
//! primitive tag/varint/length-delimited framing rules, which keeps the
//! whole client-facing protocol in one self-contained crate.
//!
//! # Quick Start
//!
//! ```rust
//! use loomwire::{ListRequest, WireMessage};
//!
//! // Build a request
//! let req = ListRequest {
//!     workflow_id: "etl-nightly".into(),
//!     status: "RUNNING".into(),
//!     limit: 20,
//! };
//!
//! // Encode to bytes
//! let bytes = req.encode();
//!
//! // Decode from bytes
//! let decoded = ListRequest::decode(&bytes)?;
//! assert_eq!(decoded, req);
//! # Ok::<(), loomwire::DecodeError>(())
//! ```
//!
//! # Wire format
//!
//! - **Tag-length-value framing** - every field is prefixed with a varint
//!   tag of `(field_number << 3) | wire_type`
//! - **Zero-value omission** - a field equal to its type's default is not
//!   written at all; a fully defaulted record encodes to zero bytes
//! - **Forward compatibility** - unknown field numbers are skipped by wire
//!   type, so newer senders do not break older receivers
//!
//! # Calling the service
//!
//! [`LoomClient`] layers typed stubs over any [`CallTransport`]
//! implementation; the codec is selected at compile time through the
//! [`WireMessage`] trait, so there is no process-wide codec registry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod codec;
pub mod messages;
pub mod wire;

pub use client::{CallError, CallTransport, LoomClient};
pub use codec::WireMessage;
pub use messages::{
    AckResponse, ApproveRequest, CancelRequest, EmptyRequest, ExecutionSummary, ListRequest,
    ListResponse, ListVersionsRequest, ListVersionsResponse, PendingApprovalItem,
    PendingApprovalsResponse, RejectRequest, VersionInfo, WorkflowIr,
};
pub use wire::{DecodeError, WireType};

/// Fully qualified service name used to build method paths
pub const SERVICE_NAME: &str = "loom.Orchestrator";

/// Default orchestrator address
pub const DEFAULT_ADDR: &str = "localhost:50051";
