//! Sequential batch processing
//!
//! Submits every prompt first, pausing between pacing groups, then collects
//! results in submission order. Nothing runs in parallel: `max_concurrent`
//! only sizes the groups between pauses.

use crate::models::{ChatRequest, Priority, Provider, RequestHandle, TaskOutcome};
use crate::services::client::OrchestratorClient;
use crate::utils::error::{ClientError, ClientResult};
use std::fmt;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Prefix of the text rendering of a failed batch entry
pub const BATCH_ERROR_PREFIX: &str = "ERROR: ";

/// Batch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Provider for every prompt in the batch
    pub provider: Provider,
    /// Priority for every prompt in the batch
    pub priority: Priority,
    /// Submissions per pacing group
    pub max_concurrent: usize,
    /// Pause before each new pacing group
    pub pacing_pause: Duration,
    /// Pause between status checks while collecting
    pub poll_interval: Duration,
    /// Per-request collection budget; `None` polls until a terminal state
    pub collect_timeout: Option<Duration>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            provider: Provider::Auto,
            priority: Priority::Normal,
            max_concurrent: 10,
            pacing_pause: Duration::from_secs(1),
            poll_interval: Duration::from_secs(1),
            collect_timeout: None,
        }
    }
}

impl BatchOptions {
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }
}

/// Result slot of one batch prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Response text
    Completed(String),
    /// Failure message reported for this prompt
    Failed(String),
}

impl BatchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, BatchOutcome::Completed(_))
    }

    /// Text form: the response, or `"ERROR: <message>"`
    pub fn into_text(self) -> String {
        match self {
            BatchOutcome::Completed(text) => text,
            BatchOutcome::Failed(message) => format!("{}{}", BATCH_ERROR_PREFIX, message),
        }
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchOutcome::Completed(text) => f.write_str(text),
            BatchOutcome::Failed(message) => write!(f, "{}{}", BATCH_ERROR_PREFIX, message),
        }
    }
}

/// Whether the submission at `index` starts a new pacing group
pub(crate) fn needs_pause(index: usize, max_concurrent: usize) -> bool {
    index > 0 && index % max_concurrent == 0
}

impl OrchestratorClient {
    /// Process prompts in batch, one outcome per prompt in input order
    ///
    /// Submission failures abort the batch. Tasks the server reports as failed
    /// are recorded in their slot instead.
    pub async fn batch<S: AsRef<str>>(
        &self,
        prompts: &[S],
        options: &BatchOptions,
    ) -> ClientResult<Vec<BatchOutcome>> {
        if options.max_concurrent == 0 {
            return Err(ClientError::Config(
                "max_concurrent must be at least 1".to_string(),
            ));
        }

        info!(
            prompts = prompts.len(),
            provider = %options.provider,
            "Submitting batch"
        );

        let mut handles = Vec::with_capacity(prompts.len());
        for (index, prompt) in prompts.iter().enumerate() {
            if needs_pause(index, options.max_concurrent) {
                debug!(index, "Pacing pause of {:?}", options.pacing_pause);
                sleep(options.pacing_pause).await;
            }

            let request = ChatRequest::new(prompt.as_ref())
                .with_provider(options.provider)
                .with_priority(options.priority);
            handles.push(self.submit(&request).await?);
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            outcomes.push(self.collect(handle, options).await?);
        }

        let failed = outcomes.iter().filter(|o| !o.is_completed()).count();
        info!(total = outcomes.len(), failed, "Batch finished");

        Ok(outcomes)
    }

    async fn collect(&self, handle: RequestHandle, options: &BatchOptions) -> ClientResult<BatchOutcome> {
        let started = Instant::now();

        loop {
            let status = self.get_status(&handle).await?;

            match status.outcome() {
                TaskOutcome::Completed(result) => return Ok(BatchOutcome::Completed(result.text)),
                TaskOutcome::Failed(message) => {
                    let message = message.unwrap_or_else(|| "Unknown".to_string());
                    warn!(request_id = %handle, "Batch entry failed: {}", message);
                    return Ok(BatchOutcome::Failed(message));
                }
                TaskOutcome::InFlight(_) => {}
            }

            if let Some(budget) = options.collect_timeout {
                if started.elapsed() >= budget {
                    warn!(request_id = %handle, "Batch entry timed out after {:?}", budget);
                    return Ok(BatchOutcome::Failed(format!(
                        "timed out after {} seconds",
                        budget.as_secs_f64()
                    )));
                }
            }

            sleep(options.poll_interval).await;
        }
    }
}
