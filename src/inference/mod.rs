//! Inference — chat-completion client for the agent loop.
//!
//! This module handles all communication with the model endpoint. Unlike a
//! streaming setup, SEOScout sends one blocking (awaited) request per turn
//! and reads back a single completed message — the agent loop decides what
//! to do with it.
//!
//! Submodules:
//! - `client`: the `ChatModel` trait and the reqwest-backed `ChatClient`
//! - `types`: OpenAI-compatible request/response DTOs
//! - `errors`: inference error types

pub mod client;
pub mod errors;
pub mod types;

// Re-exports for convenience
pub use client::{ChatClient, ChatModel};
pub use errors::LlmError;
pub use types::{ChatMessage, Role};
