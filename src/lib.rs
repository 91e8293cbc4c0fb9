//! AI Orchestrator Client Library
//!
//! Submits prompts to an AI orchestrator API, polls for their results and
//! reports provider quota usage

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{ChatRequest, ChatResult, Priority, Provider, QuotaReport, RequestHandle, RequestStatus, TaskStatus};
pub use services::{BatchOptions, BatchOutcome, OrchestratorClient, PollOptions, Session};
pub use utils::error::{ClientError, ClientResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
