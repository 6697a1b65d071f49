//! API layer for the chat proxy.
//!
//! This module contains all HTTP handlers, request/response models,
//! and the upstream call abstraction.

pub mod handlers;
pub mod models;
pub mod upstream;

// Re-export commonly used types
pub use handlers::{ai_chat, build_router, health, index, not_found, test_endpoint, AppState};
pub use models::{GroqChatPayload, HealthResponse, TestResponse};
pub use upstream::{call_groq, UpstreamError};
