//! Query submission command.
//!
//! Validates the typed (or transcribed) query at the shell boundary, then
//! runs the agent engine to completion. The engine lock also serializes
//! queries — only one is in flight at a time.

use crate::agent_core::{AgentEngine, AgentOutcome};
use crate::inference::ChatClient;
use crate::TokioMutex;

/// Warning surfaced when the user submits an empty query.
const EMPTY_QUERY_WARNING: &str = "Please enter a query.";

/// Reject empty or whitespace-only input before it enters the loop.
fn validate_query(query: &str) -> Result<&str, String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_QUERY_WARNING.to_string());
    }
    Ok(trimmed)
}

/// Map the loop's outcome to the single string the frontend displays.
///
/// Turn exhaustion gets an explicit fallback message instead of handing the
/// user raw descriptor JSON as if it were an answer.
fn present_outcome(outcome: AgentOutcome) -> String {
    match outcome {
        AgentOutcome::Answered(text) => text,
        AgentOutcome::TurnsExhausted { last_response } => format!(
            "I couldn't reach a final answer within the turn limit. \
             The last model response was:\n\n{last_response}"
        ),
    }
}

/// Run one query through the agent loop and return the final answer.
#[tauri::command]
pub async fn submit_query(
    query: String,
    engine: tauri::State<'_, TokioMutex<AgentEngine<ChatClient>>>,
) -> Result<String, String> {
    let query = validate_query(&query)?;

    let engine = engine.lock().await;
    let outcome = engine.run_query(query).await.map_err(|e| {
        tracing::error!(error = %e, "query processing aborted");
        e.to_string()
    })?;

    Ok(present_outcome(outcome))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
