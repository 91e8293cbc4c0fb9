//! Service layer module
//!
//! Contains the HTTP session, the orchestrator client and batch processing

pub mod batch;
pub mod client;
pub mod session;

pub use batch::{BatchOptions, BatchOutcome};
pub use client::{OrchestratorClient, PollOptions};
pub use session::Session;
