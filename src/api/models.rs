//! API request and response models.
//!
//! The chat body itself is handled as raw JSON so it can be forwarded (and,
//! on validation failure, echoed back) without reshaping; only the payload
//! sent upstream and the probe responses get typed structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload forwarded to the Groq chat completions endpoint.
///
/// `messages` is carried verbatim from the client request; the remaining
/// fields come from the process-wide configuration.
#[derive(Debug, Clone, Serialize)]
pub struct GroqChatPayload {
    /// Model identifier
    pub model: String,

    /// Conversation messages, forwarded unmodified
    pub messages: Value,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,
}

/// Readiness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub groq_api_configured: bool,
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub message: String,
    pub timestamp: String,
    pub status: String,
}
