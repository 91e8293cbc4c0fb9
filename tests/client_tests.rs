//! Client tests
//!
//! Exercise submit, status and quota calls against a mock orchestrator

use httpmock::prelude::*;
use orchestrator_client::models::{Priority, Provider, TaskStatus};
use orchestrator_client::{ChatRequest, ClientError, OrchestratorClient, RequestHandle};
use serde_json::json;

const API_KEY: &str = "sk_live_test_key";

/// Client pointed at the mock server, with a trailing slash to be stripped
fn create_client(server: &MockServer) -> OrchestratorClient {
    OrchestratorClient::new(&server.url("/api/v1/"), API_KEY).expect("Failed to create client")
}

#[tokio::test]
async fn test_submit_returns_handle() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/chat")
                .header("authorization", "Bearer sk_live_test_key")
                .header("content-type", "application/json")
                .json_body(json!({
                    "prompt": "What is recursion?",
                    "provider": "claude",
                    "priority": "high"
                }));
            then.status(202).json_body(json!({"id": "req-123", "status": "pending"}));
        })
        .await;

    let client = create_client(&server);
    let request = ChatRequest::new("What is recursion?")
        .with_provider(Provider::Claude)
        .with_priority(Priority::High);

    let handle = client.submit(&request).await.unwrap();

    assert_eq!(handle, RequestHandle::new("req-123"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_requires_accepted_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat");
            then.status(200).json_body(json!({"id": "req-123"}));
        })
        .await;

    let client = create_client(&server);
    let error = client.submit(&ChatRequest::new("hi")).await.unwrap_err();

    assert!(matches!(error, ClientError::Submission { status: 200, .. }));
}

#[tokio::test]
async fn test_submit_rejection_carries_raw_body() {
    let server = MockServer::start_async().await;
    let raw = r#"{"detail": "Daily quota exceeded for claude"}"#;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat");
            then.status(429).body(raw);
        })
        .await;

    let client = create_client(&server);
    let error = client.submit(&ChatRequest::new("hi")).await.unwrap_err();

    assert_eq!(error.body(), Some(raw));
    assert_eq!(error.status_code(), Some(429));
    assert!(error.to_string().contains(raw));
}

#[tokio::test]
async fn test_submit_malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat");
            then.status(202).body("accepted");
        })
        .await;

    let client = create_client(&server);
    let error = client.submit(&ChatRequest::new("hi")).await.unwrap_err();

    assert!(matches!(error, ClientError::Decode { context: "submit", .. }));
}

#[tokio::test]
async fn test_submit_then_status_on_accepted_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat");
            then.status(202).json_body(json!({"id": "req-9"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/status/req-9")
                .header("authorization", "Bearer sk_live_test_key");
            then.status(200).json_body(json!({"status": "pending", "queue_position": 4}));
        })
        .await;

    let client = create_client(&server);
    let handle = client.submit(&ChatRequest::new("What is ML?")).await.unwrap();
    let status = client.get_status(&handle).await.unwrap();

    assert_eq!(status.status, TaskStatus::Pending);
    assert!(status.response.is_none());
    assert_eq!(status.extra.get("queue_position"), Some(&json!(4)));
}

#[tokio::test]
async fn test_get_status_returns_record_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/status/req-1");
            then.status(200).json_body(json!({
                "id": "req-1",
                "status": "completed",
                "response": "Recursion is a function calling itself.",
                "provider_used": "gemini",
                "tokens_used": 17,
                "latency_ms": 912
            }));
        })
        .await;

    let client = create_client(&server);
    let status = client.get_status(&RequestHandle::new("req-1")).await.unwrap();

    assert_eq!(status.status, TaskStatus::Completed);
    assert_eq!(status.response.as_deref(), Some("Recursion is a function calling itself."));
    assert_eq!(status.provider_used.as_deref(), Some("gemini"));
    assert_eq!(status.tokens_used, Some(17));
    assert_eq!(status.latency_ms, Some(912.0));
    assert_eq!(status.extra.get("id"), Some(&json!("req-1")));
}

#[tokio::test]
async fn test_get_status_not_found_carries_raw_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/status/missing");
            then.status(404).body("Request not found");
        })
        .await;

    let client = create_client(&server);
    let error = client.get_status(&RequestHandle::new("missing")).await.unwrap_err();

    match error {
        ClientError::StatusFetch { resource, status, body } => {
            assert_eq!(resource, "status");
            assert_eq!(status, 404);
            assert_eq!(body, "Request not found");
        }
        other => panic!("Expected status fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_status_malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/status/req-1");
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let client = create_client(&server);
    let error = client.get_status(&RequestHandle::new("req-1")).await.unwrap_err();

    assert!(matches!(error, ClientError::Decode { context: "status", .. }));
}

#[tokio::test]
async fn test_get_quotas() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/quotas")
                .header("authorization", "Bearer sk_live_test_key");
            then.status(200).json_body(json!({
                "providers": {
                    "claude": {"daily": {"used": 40, "limit": 100, "remaining": 60}},
                    "deepseek": {
                        "daily": {"used": 500, "limit": 500, "remaining": 0},
                        "hourly": {"used": 20, "limit": 50, "remaining": 30}
                    }
                }
            }));
        })
        .await;

    let client = create_client(&server);
    let quotas = client.get_quotas().await.unwrap();

    assert_eq!(quotas.providers.len(), 2);
    let claude = quotas.provider("claude").unwrap();
    assert_eq!(claude.daily.used, 40);
    assert_eq!(claude.daily.remaining, Some(60));
    assert_eq!(claude.daily.usage_ratio(), Some(0.4));

    let deepseek = quotas.provider("deepseek").unwrap();
    assert!(deepseek.daily.is_exhausted());
    assert!(deepseek.extra.contains_key("hourly"));
}

#[tokio::test]
async fn test_get_quotas_failure_carries_raw_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/quotas");
            then.status(401).body(r#"{"error":"invalid api key"}"#);
        })
        .await;

    let client = create_client(&server);
    let error = client.get_quotas().await.unwrap_err();

    assert!(matches!(error, ClientError::StatusFetch { resource: "quotas", status: 401, .. }));
    assert_eq!(error.to_string(), r#"Failed to get quotas: {"error":"invalid api key"}"#);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = OrchestratorClient::new("http://127.0.0.1:1/api/v1", API_KEY).unwrap();
    let error = client.get_quotas().await.unwrap_err();

    assert!(matches!(error, ClientError::Transport(_)));
}
