//! Shared types for the agent core.

use serde::{Deserialize, Serialize};

// ─── Action Descriptor ──────────────────────────────────────────────────────

/// A parsed action descriptor from the model's response.
///
/// Ephemeral — exists only within one turn, between parsing the response
/// and dispatching to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The registered action name, e.g. `"get_seo_page_report"`.
    pub function_name: String,
    /// Generic parameter bag; each action validates its own schema.
    pub function_parms: serde_json::Map<String, serde_json::Value>,
}

impl ActionRequest {
    /// The parameter bag as a `serde_json::Value` for action dispatch.
    pub fn params_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.function_parms.clone())
    }
}

// ─── Loop Outcome ───────────────────────────────────────────────────────────

/// How a query's processing ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// The model produced a non-actionable response — the final answer.
    Answered(String),
    /// The turn ceiling was reached while the model was still requesting
    /// actions. The raw last response (usually a descriptor) is carried so
    /// the shell can decide how to present the failure.
    TurnsExhausted {
        /// The last model response produced before the ceiling.
        last_response: String,
    },
}

// ─── Tests ──────────────────────────────────────────────────────────────────
