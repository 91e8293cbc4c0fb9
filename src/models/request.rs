//! Chat request models
//!
//! Request body and handle types for the `/chat` endpoint

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upstream provider the orchestrator should route to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Let the orchestrator choose
    #[default]
    Auto,
    ChatGpt,
    Claude,
    Gemini,
    DeepSeek,
}

impl Provider {
    /// Wire name of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Auto => "auto",
            Provider::ChatGpt => "chatgpt",
            Provider::Claude => "claude",
            Provider::Gemini => "gemini",
            Provider::DeepSeek => "deepseek",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Provider::Auto),
            "chatgpt" => Ok(Provider::ChatGpt),
            "claude" => Ok(Provider::Claude),
            "gemini" => Ok(Provider::Gemini),
            "deepseek" => Ok(Provider::DeepSeek),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

/// Queue priority of a chat request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "normal" => Ok(Priority::Normal),
            "low" => Ok(Priority::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Prompt text
    pub prompt: String,
    /// Requested provider
    #[serde(default)]
    pub provider: Provider,
    /// Queue priority
    #[serde(default)]
    pub priority: Priority,
}

impl ChatRequest {
    /// Create a request with the default provider (`auto`) and priority (`normal`)
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            provider: Provider::default(),
            priority: Priority::default(),
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Opaque identifier of a submitted request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestHandle(String);

impl RequestHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RequestHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RequestHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Body of a `202 Accepted` reply to `POST /chat`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Request identifier
    pub id: RequestHandle,
}
