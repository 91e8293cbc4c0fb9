//! Error handling module
//!
//! Defines the error taxonomy of the orchestrator client

use std::time::Duration;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server did not accept the chat request
    #[error("Failed to submit request: {body}")]
    Submission {
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A status or quota lookup returned a non-ok status code
    #[error("Failed to get {resource}: {body}")]
    StatusFetch {
        /// What was being fetched ("status" or "quotas")
        resource: &'static str,
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The server reported the task as failed
    #[error("Request failed: {0}")]
    RemoteTaskFailure(String),

    /// Polling exhausted its wait budget
    #[error("Request timed out after {} seconds", .max_wait.as_secs_f64())]
    Timeout {
        /// The configured maximum wait
        max_wait: Duration,
    },

    /// Response body was not the expected JSON
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport error
    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Raw response body for HTTP-level failures
    pub fn body(&self) -> Option<&str> {
        match self {
            ClientError::Submission { body, .. } | ClientError::StatusFetch { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }

    /// HTTP status code for HTTP-level failures
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Submission { status, .. } | ClientError::StatusFetch { status, .. } => {
                Some(*status)
            }
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was reported by the remote task itself rather than the client
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, ClientError::RemoteTaskFailure(_))
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;
