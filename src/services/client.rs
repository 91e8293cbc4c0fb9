//! Orchestrator client
//!
//! Request lifecycle operations: submit, status lookup, polling and quotas

use crate::config::Settings;
use crate::models::{
    ChatRequest, ChatResult, QuotaReport, RequestHandle, RequestStatus, SubmitResponse,
    TaskOutcome,
};
use crate::services::session::{Session, DEFAULT_REQUEST_TIMEOUT};
use crate::utils::error::{ClientError, ClientResult};
use crate::utils::logging::prompt_preview;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Default polling budget of `await_result`
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(120);

/// Default pause between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Polling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Give up once this much time has elapsed without a terminal state
    pub max_wait: Duration,
    /// Fixed pause between status checks
    pub poll_interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            max_wait: DEFAULT_MAX_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// AI orchestrator API client
#[derive(Debug, Clone)]
pub struct OrchestratorClient {
    session: Session,
}

impl OrchestratorClient {
    /// Create a client with the default HTTP timeout
    pub fn new(base_url: &str, api_key: &str) -> ClientResult<Self> {
        Ok(Self::with_session(Session::new(base_url, api_key, DEFAULT_REQUEST_TIMEOUT)?))
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> ClientResult<Self> {
        let session = Session::new(
            &settings.orchestrator.base_url,
            &settings.orchestrator.api_key,
            settings.request_timeout(),
        )?;
        Ok(Self::with_session(session))
    }

    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Submit a chat request without waiting for it to finish
    pub async fn submit(&self, request: &ChatRequest) -> ClientResult<RequestHandle> {
        debug!(
            provider = %request.provider,
            priority = %request.priority,
            "Submitting chat request: {}",
            prompt_preview(&request.prompt)
        );

        let response = self
            .session
            .http()
            .post(self.session.url("/chat"))
            .json(request)
            .send()
            .await?;

        let (status, body) = read_body(response).await?;
        if status != StatusCode::ACCEPTED {
            warn!("Chat request rejected: {} - {}", status, body);
            return Err(ClientError::Submission {
                status: status.as_u16(),
                body,
            });
        }

        let accepted: SubmitResponse = decode(&body, "submit")?;
        debug!(request_id = %accepted.id, "Chat request accepted");
        Ok(accepted.id)
    }

    /// Fetch the current status of a request
    pub async fn get_status(&self, handle: &RequestHandle) -> ClientResult<RequestStatus> {
        let url = self.session.segment_url("/status", handle.as_str())?;
        self.get_ok(url.as_str(), "status").await
    }

    /// Fetch current quota usage for all providers
    pub async fn get_quotas(&self) -> ClientResult<QuotaReport> {
        let url = self.session.url("/quotas");
        self.get_ok(&url, "quotas").await
    }

    /// Poll a request until it completes, fails or the wait budget runs out
    ///
    /// A `failed` status ends polling immediately. The handle is consumed:
    /// once a terminal state is observed it has nothing left to report.
    pub async fn await_result(
        &self,
        handle: RequestHandle,
        options: PollOptions,
    ) -> ClientResult<ChatResult> {
        let started = Instant::now();
        let mut polls: u32 = 0;

        while started.elapsed() < options.max_wait {
            polls += 1;
            let status = self.get_status(&handle).await?;

            match status.outcome() {
                TaskOutcome::Completed(result) => {
                    info!(
                        request_id = %handle,
                        provider = result.provider.as_deref().unwrap_or("unknown"),
                        polls,
                        "Request completed"
                    );
                    return Ok(result);
                }
                TaskOutcome::Failed(message) => {
                    let message = message.unwrap_or_else(|| "Unknown error".to_string());
                    warn!(request_id = %handle, polls, "Request failed: {}", message);
                    return Err(ClientError::RemoteTaskFailure(message));
                }
                TaskOutcome::InFlight(state) => {
                    debug!(request_id = %handle, status = %state, "Request still in flight");
                    sleep(options.poll_interval).await;
                }
            }
        }

        warn!(
            request_id = %handle,
            polls,
            "Request timed out after {:?}",
            options.max_wait
        );
        Err(ClientError::Timeout {
            max_wait: options.max_wait,
        })
    }

    /// Submit a chat request and wait for its result
    pub async fn chat(&self, request: &ChatRequest, options: PollOptions) -> ClientResult<ChatResult> {
        let handle = self.submit(request).await?;
        self.await_result(handle, options).await
    }

    async fn get_ok<T: DeserializeOwned>(&self, url: &str, resource: &'static str) -> ClientResult<T> {
        debug!("GET {}", url);

        let response = self.session.http().get(url).send().await?;
        let (status, body) = read_body(response).await?;
        if status != StatusCode::OK {
            warn!("Failed to get {}: {} - {}", resource, status, body);
            return Err(ClientError::StatusFetch {
                resource,
                status: status.as_u16(),
                body,
            });
        }

        decode(&body, resource)
    }
}

/// Read status code and raw body text of a response
async fn read_body(response: Response) -> ClientResult<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn decode<T: DeserializeOwned>(body: &str, context: &'static str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|source| ClientError::Decode { context, source })
}
