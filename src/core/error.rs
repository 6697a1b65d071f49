//! Error types and handling for the chat proxy.
//!
//! This module provides a unified error type [`AppError`] covering the three
//! failure tiers surfaced to callers: client input errors, configuration
//! errors, and upstream failures. Every variant converts into a well-formed
//! JSON response via [`IntoResponse`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Main error type for the application.
///
/// No error is retried; every failure is terminal for its request and is
/// reported immediately to the caller with enough detail to diagnose it.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body missing a `messages` array. The offending body is
    /// echoed back to the caller.
    #[error("Messages must be an array")]
    InvalidMessages { received: Value },

    /// The upstream credential was never configured
    #[error("GROQ_API_KEY not configured in environment variables")]
    MissingApiKey,

    /// Upstream rejected the call; its status and body are relayed verbatim
    #[error("Groq API Error: {}", .status.as_u16())]
    UpstreamStatus { status: StatusCode, details: Value },

    /// The upstream request produced no response (network error or timeout)
    #[error("Cannot connect to Groq API")]
    UpstreamUnreachable,

    /// Generic internal server errors with custom message
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidMessages { received } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Messages must be an array",
                    "received": received,
                }),
            ),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "GROQ_API_KEY not configured in environment variables",
                }),
            ),
            AppError::UpstreamStatus { status, details } => (
                status,
                json!({
                    "error": format!("Groq API Error: {}", status.as_u16()),
                    "details": details,
                }),
            ),
            AppError::UpstreamUnreachable => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "Cannot connect to Groq API",
                    "details": "Network error or timeout",
                }),
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Internal server error",
                    "details": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for Results using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to read an axum Response body as JSON Value.
    async fn body_json(response: Response) -> Value {
        let body = response.into_body();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidMessages {
            received: json!({}),
        };
        assert_eq!(err.to_string(), "Messages must be an array");

        let err = AppError::MissingApiKey;
        assert_eq!(
            err.to_string(),
            "GROQ_API_KEY not configured in environment variables"
        );

        let err = AppError::UpstreamStatus {
            status: StatusCode::UNAUTHORIZED,
            details: json!({}),
        };
        assert_eq!(err.to_string(), "Groq API Error: 401");

        let err = AppError::UpstreamUnreachable;
        assert_eq!(err.to_string(), "Cannot connect to Groq API");

        let err = AppError::Internal("test error".to_string());
        assert_eq!(err.to_string(), "Internal server error: test error");
    }

    #[tokio::test]
    async fn test_invalid_messages_response() {
        let err = AppError::InvalidMessages {
            received: json!({"messages": "not an array"}),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Messages must be an array");
        assert_eq!(body["received"]["messages"], "not an array");
    }

    #[tokio::test]
    async fn test_missing_api_key_response() {
        let err = AppError::MissingApiKey;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "GROQ_API_KEY not configured in environment variables"
        );
    }

    #[tokio::test]
    async fn test_upstream_status_is_mirrored() {
        let err = AppError::UpstreamStatus {
            status: StatusCode::TOO_MANY_REQUESTS,
            details: json!({"error": {"message": "rate limited"}}),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Groq API Error: 429");
        assert_eq!(body["details"]["error"]["message"], "rate limited");
    }

    #[tokio::test]
    async fn test_unreachable_response() {
        let err = AppError::UpstreamUnreachable;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Cannot connect to Groq API");
        assert_eq!(body["details"], "Network error or timeout");
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let err = AppError::Internal("custom error".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "custom error");
    }

    #[tokio::test]
    async fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        let result = returns_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }
}
