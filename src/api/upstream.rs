//! Upstream request execution for the Groq completions API.
//!
//! Centralizes the single outbound call and classifies its failures into the
//! three cases the handler dispatches on: rejected by upstream, unreachable
//! upstream, and local failure.

use crate::api::models::GroqChatPayload;
use crate::core::config::GroqConfig;
use crate::core::error::AppError;
use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure classes for one upstream call.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status; its body is relayed
    /// verbatim to the caller.
    #[error("Groq API returned status {status}")]
    Status { status: StatusCode, details: Value },

    /// The request never produced a response (connect failure or timeout).
    #[error("network error or timeout")]
    Unreachable(#[source] reqwest::Error),

    /// Failure before or after the network call (request construction,
    /// body read).
    #[error("{0}")]
    Local(String),
}

impl From<UpstreamError> for AppError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::Status { status, details } => {
                AppError::UpstreamStatus { status, details }
            }
            UpstreamError::Unreachable(_) => AppError::UpstreamUnreachable,
            UpstreamError::Local(message) => AppError::Internal(message),
        }
    }
}

/// Execute exactly one chat-completion call against the Groq API.
///
/// On success (2xx) the parsed JSON body is returned verbatim. No retry,
/// no backoff; the configured client timeout bounds the call.
pub async fn call_groq(
    http_client: &reqwest::Client,
    config: &GroqConfig,
    api_key: &str,
    messages: Value,
) -> Result<Value, UpstreamError> {
    let payload = GroqChatPayload {
        model: config.model.clone(),
        messages,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    };

    let response = http_client
        .post(&config.api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&payload)
        .send()
        .await
        .map_err(classify_send_error)?;

    let status = normalize_upstream_status(response.status());
    let body = read_json_body(response).await?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(UpstreamError::Status {
            status,
            details: body,
        })
    }
}

/// Classify a transport-level send failure.
///
/// Builder errors never reached the network; everything else (connect
/// failures, timeouts, aborted transfers) counts as no response received.
fn classify_send_error(error: reqwest::Error) -> UpstreamError {
    if error.is_builder() {
        UpstreamError::Local(error.to_string())
    } else {
        UpstreamError::Unreachable(error)
    }
}

/// Normalize reqwest status code into axum status code.
fn normalize_upstream_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Read the response body, keeping non-JSON payloads as a raw string value.
async fn read_json_body(response: reqwest::Response) -> Result<Value, UpstreamError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::Local(format!("Failed to read upstream response: {}", e)))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(body) => Ok(body),
        Err(_) => Ok(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        )),
    }
}
