//! HTTP request handlers for the chat proxy API.
//!
//! This module contains the chat proxy endpoint, the probe endpoints, the
//! catch-all 404 fallback, and the router wiring them together.

use crate::api::models::{HealthResponse, TestResponse};
use crate::api::upstream::call_groq;
use crate::core::{request_logging_middleware, AppConfig, AppError, Result};
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
///
/// Holds the immutable configuration and the pooled HTTP client, both
/// constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
}

/// Handle chat proxy requests.
///
/// Validates the body shape, attaches the server-held credential, forwards
/// the messages to the Groq completions API, and relays the response (or a
/// translated error) back to the caller. Exactly one upstream call per
/// request.
#[tracing::instrument(skip(state, payload))]
pub async fn ai_chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Response> {
    let messages = match payload.get("messages") {
        Some(messages) if messages.is_array() => messages.clone(),
        _ => return Err(AppError::InvalidMessages { received: payload }),
    };

    let api_key = state
        .config
        .groq
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(AppError::MissingApiKey)?;

    tracing::debug!(
        model = %state.config.groq.model,
        message_count = messages.as_array().map(|m| m.len()).unwrap_or(0),
        "Forwarding chat request to Groq"
    );

    let body = call_groq(&state.http_client, &state.config.groq, api_key, messages).await?;

    Ok(Json(body).into_response())
}

/// Endpoint index, served at the root.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "endpoints": {
            "GET /": "endpoint index",
            "GET /test": "liveness probe",
            "GET /health": "readiness probe",
            "POST /ai-chat": "chat completion proxy",
        },
    }))
}

/// Liveness probe.
pub async fn test_endpoint() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Proxy server is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        status: "ok".to_string(),
    })
}

/// Readiness probe, reporting whether the upstream credential is configured.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        groq_api_configured: state.config.groq.is_configured(),
    })
}

/// Catch-all for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "method": method.as_str(),
            "url": uri.path(),
            "hint": "Valid routes: GET /, GET /test, GET /health, POST /ai-chat",
        })),
    )
}

/// Build the router with all endpoints and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/test", get(test_endpoint))
        .route("/health", get(health))
        .route("/ai-chat", post(ai_chat))
        .fallback(not_found)
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
