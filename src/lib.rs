//! Groq Chat Proxy - a credential-injecting relay for the Groq chat API
//!
//! This library provides a small HTTP proxy that forwards chat-completion
//! requests to the Groq OpenAI-compatible API, attaching a server-held
//! bearer credential so it is never exposed to the client. Failures are
//! translated into a fixed three-tier taxonomy:
//!
//! - **Client input error**: missing/malformed `messages` (HTTP 400)
//! - **Configuration error**: missing credential (HTTP 500)
//! - **Upstream failure**: status mirrored from upstream, 503 when
//!   unreachable, 500 for anything else
//!
//! # Architecture
//!
//! The codebase is organized into two layers:
//!
//! - [`core`]: Core functionality (config, errors, logging, middleware)
//! - [`api`]: HTTP handlers, upstream call, and request/response models
//!
//! # Configuration
//!
//! Environment variables (a `.env` file is loaded at startup):
//! - `GROQ_API_KEY`: upstream credential (required for proxying)
//! - `GROQ_MODEL`: model identifier override (default: llama-3.3-70b-versatile)
//! - `GROQ_API_URL`: upstream endpoint override
//! - `HOST`: server bind address (default: 0.0.0.0)
//! - `PORT`: server port (default: 3000)

pub mod api;
pub mod core;

// Re-export commonly used types for convenience
pub use api::{ai_chat, build_router, AppState};
pub use core::{AppConfig, AppError, GroqConfig, Result, ServerConfig};
