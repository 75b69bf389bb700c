//! Agent Core — the tool-invocation loop for SEOScout.
//!
//! Submodules:
//! - `engine`: the fixed-turn conversation loop
//! - `parser`: extracts one JSON action descriptor from free-form model text
//! - `prompt`: the ReAct system prompt constant
//! - `types`: `ActionRequest`, `AgentOutcome`
//! - `errors`: agent-level error types

pub mod engine;
pub mod errors;
pub mod parser;
pub mod prompt;
pub mod types;

// Re-exports for convenience
pub use engine::AgentEngine;
pub use errors::AgentError;
pub use types::{ActionRequest, AgentOutcome};
