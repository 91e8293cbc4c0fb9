//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::services::{BatchOptions, PollOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default orchestrator endpoint
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Orchestrator API configuration
    pub orchestrator: OrchestratorConfig,
    /// Polling configuration
    pub polling: PollingConfig,
    /// Batch configuration
    pub batch: BatchConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Orchestrator API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// API base URL
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Per-call HTTP timeout in seconds
    pub timeout: u64,
}

/// Polling configuration for single requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Maximum seconds to wait for a terminal state
    pub max_wait_secs: u64,
    /// Milliseconds between status checks
    pub poll_interval_ms: u64,
}

/// Batch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Submissions per pacing group
    pub max_concurrent: usize,
    /// Pause between pacing groups in milliseconds
    pub pause_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            orchestrator: OrchestratorConfig {
                base_url: get_env_or_default("AI_API_URL", DEFAULT_API_URL),
                api_key: std::env::var("AI_API_KEY")
                    .context("AI_API_KEY environment variable not set")?,
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            polling: PollingConfig {
                max_wait_secs: get_env_or_default("MAX_WAIT_SECS", "120")
                    .parse()
                    .context("Invalid maximum wait")?,
                poll_interval_ms: get_env_or_default("POLL_INTERVAL_MS", "1000")
                    .parse()
                    .context("Invalid poll interval")?,
            },
            batch: BatchConfig {
                max_concurrent: get_env_or_default("BATCH_MAX_CONCURRENT", "10")
                    .parse()
                    .context("Invalid batch size")?,
                pause_ms: get_env_or_default("BATCH_PAUSE_MS", "1000")
                    .parse()
                    .context("Invalid batch pause")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.orchestrator.api_key.is_empty() {
            anyhow::bail!("API key cannot be empty");
        }

        if self.orchestrator.api_key.contains(char::is_whitespace) {
            anyhow::bail!("API key cannot contain whitespace characters");
        }

        if !self.orchestrator.base_url.starts_with("http") {
            anyhow::bail!("Invalid API base URL format, should start with 'http'");
        }

        if self.orchestrator.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if self.polling.poll_interval_ms == 0 {
            anyhow::bail!("Poll interval cannot be 0");
        }

        if self.batch.max_concurrent == 0 {
            anyhow::bail!("Batch size cannot be 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// HTTP timeout for a single call
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.orchestrator.timeout)
    }

    /// Polling options for `await_result`
    pub fn poll_options(&self) -> PollOptions {
        PollOptions {
            max_wait: Duration::from_secs(self.polling.max_wait_secs),
            poll_interval: Duration::from_millis(self.polling.poll_interval_ms),
        }
    }

    /// Default batch options
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            max_concurrent: self.batch.max_concurrent,
            pacing_pause: Duration::from_millis(self.batch.pause_ms),
            ..BatchOptions::default()
        }
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
