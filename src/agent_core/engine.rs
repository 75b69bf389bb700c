//! AgentEngine — the fixed-turn conversation loop.
//!
//! Drives up to `MAX_TURNS - 1` model calls, each optionally followed by
//! exactly one action invocation, and returns the final textual answer.
//! Two states only: awaiting the model, or done. No cancellation, no
//! pause/resume, no retries — a model or action failure aborts the query.

use uuid::Uuid;

use crate::actions::ActionRegistry;
use crate::inference::{ChatMessage, ChatModel};

use super::errors::AgentError;
use super::parser;
use super::prompt::REACT_SYSTEM_PROMPT;
use super::types::AgentOutcome;

// ─── Constants ──────────────────────────────────────────────────────────────

/// Turn ceiling. The counter starts at 1 and increments before each model
/// call, so a query makes at most `MAX_TURNS - 1` (4) model invocations.
const MAX_TURNS: u32 = 5;

// ─── AgentEngine ────────────────────────────────────────────────────────────

/// The conversation loop, generic over the chat backend so tests can drive
/// it with scripted responses.
pub struct AgentEngine<M: ChatModel> {
    model: M,
    registry: ActionRegistry,
    /// Model identifier selected for the loop's call sites.
    model_id: String,
}

impl<M: ChatModel> AgentEngine<M> {
    /// Create an engine from a chat backend, an action registry, and the
    /// model identifier the loop's calls should use.
    pub fn new(model: M, registry: ActionRegistry, model_id: impl Into<String>) -> Self {
        Self {
            model,
            registry,
            model_id: model_id.into(),
        }
    }

    /// Process one query to completion.
    ///
    /// Seeds the transcript with the system prompt and the user's query,
    /// then alternates model calls with at most one action invocation per
    /// turn. The transcript is append-only and owned by this call; action
    /// results are fed back as synthetic `Action_Response:` user messages.
    pub async fn run_query(&self, user_query: &str) -> Result<AgentOutcome, AgentError> {
        let query_id = Uuid::new_v4();

        let mut transcript = vec![
            ChatMessage::system(REACT_SYSTEM_PROMPT),
            ChatMessage::user(user_query),
        ];

        let mut turn_count: u32 = 1;
        let mut last_response = String::new();

        while turn_count < MAX_TURNS {
            turn_count += 1;

            tracing::info!(
                query_id = %query_id,
                turn = turn_count - 1,
                transcript_len = transcript.len(),
                "model turn"
            );

            let response = self.model.complete(&self.model_id, &transcript).await?;

            match parser::extract_action(&response) {
                Some(request) => {
                    let action = self.registry.get(&request.function_name).ok_or_else(|| {
                        AgentError::UnknownAction {
                            name: request.function_name.clone(),
                            parameters: request.params_value(),
                        }
                    })?;

                    tracing::info!(
                        query_id = %query_id,
                        action = %request.function_name,
                        "running action"
                    );

                    let result = action.invoke(&request.params_value()).await?;

                    transcript.push(ChatMessage::user(format!("Action_Response: {result}")));
                    last_response = response;
                }
                None => {
                    tracing::info!(
                        query_id = %query_id,
                        turns_used = turn_count - 1,
                        "final answer produced"
                    );
                    return Ok(AgentOutcome::Answered(response));
                }
            }
        }

        // Ceiling reached while the model was still requesting actions. The
        // raw last response is carried out; the shell decides presentation.
        tracing::warn!(query_id = %query_id, "turn ceiling reached without a final answer");
        Ok(AgentOutcome::TurnsExhausted { last_response })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
