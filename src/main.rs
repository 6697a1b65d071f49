//! Groq Chat Proxy - Main entry point
//!
//! This binary creates and runs the HTTP server. Configuration is read from
//! the environment once at startup and stays immutable for the process
//! lifetime.

use anyhow::{Context, Result};
use groq_proxy_rust::{build_router, AppConfig, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    // Always suppress noisy HTTP library logs regardless of RUST_LOG setting
    let base_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,groq_proxy_rust=debug".to_string());
    let filter_str = format!("{},hyper=warn,h2=warn,reqwest=warn", base_filter);
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    if !config.groq.is_configured() {
        tracing::warn!(
            "GROQ_API_KEY is not set; /ai-chat will reject requests until it is configured"
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let http_client = create_http_client(&config);
    let state = Arc::new(AppState {
        config,
        http_client,
    });
    let app = build_router(state);

    tracing::info!("Starting Groq chat proxy on {}", addr);
    tracing::info!("Chat endpoint: POST /ai-chat");
    tracing::info!("Probes: GET /test, GET /health");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create HTTP client with connection pooling and the upstream timeout.
fn create_http_client(config: &AppConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.groq.timeout_secs))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .tcp_keepalive(std::time::Duration::from_secs(60))
        .build()
        .expect("Failed to build HTTP client")
}
