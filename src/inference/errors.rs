//! Inference error types.
//!
//! All errors implement `std::error::Error` via `thiserror`. Structured
//! logging is the caller's responsibility — these types carry the context
//! needed to build meaningful log entries.

use thiserror::Error;

/// Errors that can occur during a chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// TCP/HTTP connection to the model endpoint failed.
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    /// The model endpoint did not respond within the configured timeout.
    #[error("inference timeout after {duration_secs}s")]
    Timeout { duration_secs: u64 },

    /// Non-2xx HTTP response from the model endpoint.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("malformed completion response: {reason}")]
    MalformedResponse { reason: String },

    /// The endpoint returned no choices or a choice with no content.
    #[error("model returned an empty completion")]
    EmptyCompletion,
}
