//! AI Orchestrator demo client
//!
//! Runs a simple chat, prints quota usage and processes a small batch

use anyhow::{Context, Result};
use orchestrator_client::{ChatRequest, OrchestratorClient, Provider, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load client settings")?;

    init_logging(&settings);
    info!("{}", orchestrator_client::version_info());

    let client = OrchestratorClient::from_settings(&settings)
        .context("Failed to create orchestrator client")?;

    println!("Example 1: Simple chat");
    let response = client
        .chat(
            &ChatRequest::new("What is recursion? Explain in one sentence."),
            settings.poll_options(),
        )
        .await
        .context("Chat request failed")?;
    println!("Response: {}", response.text);
    println!("Provider: {}", response.provider.as_deref().unwrap_or("unknown"));
    println!("Tokens: {}", response.tokens.map_or_else(|| "?".to_string(), |t| t.to_string()));
    println!(
        "Latency: {}ms",
        response.latency_ms.map_or_else(|| "?".to_string(), |l| l.to_string())
    );
    println!();

    println!("Example 2: Check quotas");
    let quotas = client.get_quotas().await.context("Failed to get quotas")?;
    for (provider, quota) in &quotas.providers {
        let daily = quota.daily;
        let limit = daily.limit.map_or_else(|| "unlimited".to_string(), |l| l.to_string());
        let remaining = daily.remaining.map_or_else(|| "?".to_string(), |r| r.to_string());
        let usage = daily
            .usage_ratio()
            .map_or_else(String::new, |ratio| format!(" [{:.0}%]", ratio * 100.0));
        println!(
            "{}: {}/{} used ({} remaining){}",
            provider, daily.used, limit, remaining, usage
        );
    }
    println!();

    println!("Example 3: Batch processing");
    let prompts = ["What is AI?", "What is ML?", "What is Deep Learning?"];
    let options = settings.batch_options().with_provider(Provider::DeepSeek);
    let results = client
        .batch(&prompts, &options)
        .await
        .context("Batch processing failed")?;
    for (i, (prompt, result)) in prompts.iter().zip(results).enumerate() {
        println!("Q{}: {}", i + 1, prompt);
        println!("A{}: {}", i + 1, result);
        println!();
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(settings: &Settings) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if settings.logging.format == "json" {
        // JSON format logs
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(settings.logging.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr)
                .finish(),
        )
    } else {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(settings.logging.level.as_str())
                .with_target(false)
                .with_writer(std::io::stderr)
                .finish(),
        )
    };

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging system already initialized");
    }
}

