//! HTTP session
//!
//! Holds the orchestrator base URL and an HTTP client that carries the
//! bearer credential on every request

use crate::utils::error::{ClientError, ClientResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Default per-call HTTP timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection to one orchestrator endpoint under one credential
///
/// Immutable after construction. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    http: Client,
}

impl Session {
    /// Create a session; trailing slashes are stripped from `base_url`
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if api_key.is_empty() {
            return Err(ClientError::Config("API key cannot be empty".to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| ClientError::Config(format!("Invalid API key: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("orchestrator-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;

        debug!("Created orchestrator session for {}", base_url);

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/chat`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL for an API path followed by one escaped path segment,
    /// e.g. `/status` + request id
    pub fn segment_url(&self, path: &str, segment: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| ClientError::Config(format!("Invalid request URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("Base URL cannot carry a path: {}", self.base_url)))?
            .push(segment);
        Ok(url)
    }

    pub fn http(&self) -> &Client {
        &self.http
    }
}
