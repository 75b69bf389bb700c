//! Runtime settings loaded from the process environment.
//!
//! Two credentials are required at runtime: the chat-completion API key and
//! the RapidAPI key for the SEO audit service. Neither is validated at
//! startup — a missing key is logged as a warning and the corresponding
//! call fails downstream with an HTTP error.

use std::env;

// ─── Defaults ───────────────────────────────────────────────────────────────

/// Base URL for the OpenAI-compatible chat/transcription endpoints.
const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used for one-off completions (titles, quick lookups).
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Model the agent loop selects explicitly for its turns.
const DEFAULT_AGENT_MODEL: &str = "gpt-4";

// ─── Settings ───────────────────────────────────────────────────────────────

/// Application settings resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer token for the chat-completion and transcription endpoints.
    pub openai_api_key: String,
    /// RapidAPI credential for the SEO audit service.
    pub rapidapi_key: String,
    /// Base URL for the OpenAI-compatible API.
    pub api_base_url: String,
    /// Default model identifier (non-agent call sites).
    pub default_model: String,
    /// Model identifier the agent loop selects per call.
    pub agent_model: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// `OPENAI_API_KEY` and `RAPIDAPI_KEY` are expected; their absence is
    /// logged but not treated as fatal. `SEOSCOUT_API_BASE_URL`,
    /// `SEOSCOUT_MODEL`, and `SEOSCOUT_AGENT_MODEL` override the defaults.
    pub fn from_env() -> Self {
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let rapidapi_key = env::var("RAPIDAPI_KEY").unwrap_or_default();

        if openai_api_key.is_empty() {
            tracing::warn!("OPENAI_API_KEY is not set — model calls will fail");
        }
        if rapidapi_key.is_empty() {
            tracing::warn!("RAPIDAPI_KEY is not set — SEO audit calls will fail");
        }

        Self {
            openai_api_key,
            rapidapi_key,
            api_base_url: env::var("SEOSCOUT_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            default_model: env::var("SEOSCOUT_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            agent_model: env::var("SEOSCOUT_AGENT_MODEL")
                .unwrap_or_else(|_| DEFAULT_AGENT_MODEL.to_string()),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_defaults_are_distinct() {
        // The loop's model and the default model are separate call-site
        // choices and must not silently collapse into one.
        assert_ne!(DEFAULT_MODEL, DEFAULT_AGENT_MODEL);
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        // Endpoint paths are joined with a leading slash.
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
