//! Data models module
//!
//! Defines request, status and quota structures of the orchestrator API

pub mod quota;
pub mod request;
pub mod status;

pub use quota::{ProviderQuota, QuotaReport, QuotaWindow};
pub use request::{ChatRequest, Priority, Provider, RequestHandle, SubmitResponse};
pub use status::{ChatResult, RequestStatus, TaskOutcome, TaskStatus};
