//! Core functionality for the chat proxy.
//!
//! This module contains fundamental components used throughout the application:
//! - Configuration management
//! - Error handling
//! - Request-scoped logging
//! - HTTP middleware

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;

// Re-export commonly used types
pub use config::{AppConfig, GroqConfig, ServerConfig};
pub use error::{AppError, Result};
pub use logging::{generate_request_id, get_request_id, REQUEST_ID};
pub use middleware::request_logging_middleware;
