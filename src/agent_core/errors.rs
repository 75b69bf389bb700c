//! Agent Core error types.

use thiserror::Error;

use crate::actions::ActionError;
use crate::inference::LlmError;

/// Errors that abort query processing.
///
/// The loop performs no local recovery: any of these terminates the query
/// and surfaces at the shell boundary.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The model requested an action name absent from the registry.
    /// Detected before any operation is invoked.
    #[error("unknown action: {name}: {parameters}")]
    UnknownAction {
        name: String,
        parameters: serde_json::Value,
    },

    /// The resolved action's invocation failed (network, HTTP, payload).
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The model call itself failed.
    #[error(transparent)]
    Llm(#[from] LlmError),
}
