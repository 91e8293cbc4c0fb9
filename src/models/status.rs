//! Request status models
//!
//! Decoded `/status/{id}` records and the lifecycle state machine built on them

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Lifecycle state reported by the orchestrator
///
/// Only `Completed` and `Failed` are terminal. Non-terminal names are
/// server-defined, so unrecognized values are kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Processing => "processing",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
            TaskStatus::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            TaskStatus::Completed | TaskStatus::Failed => true,
            TaskStatus::Pending | TaskStatus::Processing | TaskStatus::Other(_) => false,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => TaskStatus::Pending,
            "processing" => TaskStatus::Processing,
            "completed" => TaskStatus::Completed,
            "failed" => TaskStatus::Failed,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status record returned by `GET /status/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestStatus {
    /// Lifecycle state
    pub status: TaskStatus,
    /// Response text (set once completed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Provider that served the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_used: Option<String>,
    /// Tokens consumed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    /// Provider latency in milliseconds, possibly fractional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    /// Failure reason (set once failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Any other fields the server includes
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl RequestStatus {
    /// Project the record onto the lifecycle state machine
    pub fn outcome(&self) -> TaskOutcome {
        match &self.status {
            TaskStatus::Completed => TaskOutcome::Completed(ChatResult {
                text: self.response.clone().unwrap_or_default(),
                provider: self.provider_used.clone(),
                tokens: self.tokens_used,
                latency_ms: self.latency_ms,
            }),
            TaskStatus::Failed => TaskOutcome::Failed(self.error_message.clone()),
            in_flight @ (TaskStatus::Pending | TaskStatus::Processing | TaskStatus::Other(_)) => {
                TaskOutcome::InFlight(in_flight.clone())
            }
        }
    }
}

/// Decision-relevant view of a status record
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    /// Still queued or running
    InFlight(TaskStatus),
    /// Finished with a response
    Completed(ChatResult),
    /// Finished with an error, message if the server gave one
    Failed(Option<String>),
}

/// Normalized result of a completed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Response text
    pub text: String,
    /// Provider that served the request
    pub provider: Option<String>,
    /// Tokens consumed
    pub tokens: Option<u64>,
    /// Provider latency in milliseconds
    pub latency_ms: Option<f64>,
}
