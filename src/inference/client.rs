//! OpenAI-compatible inference client.
//!
//! Sends non-streaming chat completion requests to the configured endpoint
//! and returns the first choice's message content. The agent loop is generic
//! over [`ChatModel`] so tests can drive it with a scripted double instead
//! of a live endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::config::Settings;

use super::errors::LlmError;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

// ─── Constants ───────────────────────────────────────────────────────────────

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout.
///
/// Agent turns carry the full transcript, and hosted models can take tens of
/// seconds on long contexts. A short timeout here surfaces as a dead turn
/// that looks like an empty response to the loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

// ─── ChatModel Trait ─────────────────────────────────────────────────────────

/// A chat-completion backend: full transcript in, one textual response out.
///
/// The model identifier is chosen per call site — the agent loop selects its
/// own model explicitly rather than inheriting a process-wide default.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Request one completion for the given transcript.
    async fn complete(
        &self,
        model_id: &str,
        messages: &[ChatMessage],
    ) -> Result<String, LlmError>;
}

// ─── ChatClient ──────────────────────────────────────────────────────────────

/// Client for the OpenAI-compatible chat-completion endpoint.
pub struct ChatClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl ChatClient {
    /// Create a client from settings.
    ///
    /// Does NOT check connectivity or the API key — that happens on the
    /// first request.
    pub fn new(settings: &Settings) -> Result<Self, LlmError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LlmError::ConnectionFailed {
                endpoint: settings.api_base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
            api_key: settings.openai_api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatModel for ChatClient {
    async fn complete(
        &self,
        model_id: &str,
        messages: &[ChatMessage],
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatCompletionRequest {
            model: model_id.to_string(),
            messages: messages.to_vec(),
        };

        // Log request metadata, not the transcript — it can be large and
        // contains the user's query verbatim.
        tracing::info!(
            url = %url,
            model = %body.model,
            message_count = body.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout {
                        duration_secs: REQUEST_TIMEOUT.as_secs(),
                    }
                } else {
                    LlmError::ConnectionFailed {
                        endpoint: url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| LlmError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(LlmError::EmptyCompletion)?;

        tracing::debug!(chars = content.len(), "received completion");

        Ok(content)
    }
}
