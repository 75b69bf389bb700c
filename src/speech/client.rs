//! Whisper transcription client.
//!
//! Uploads recorded audio to the OpenAI-compatible
//! `POST /v1/audio/transcriptions` endpoint and returns the transcript.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::config::Settings;

use super::errors::SpeechError;

// ─── Constants ──────────────────────────────────────────────────────────────

/// Transcription model identifier.
const TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Filename attached to the multipart audio part. The service derives the
/// container format from the extension.
const AUDIO_FILENAME: &str = "query.webm";

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout — uploads plus server-side decoding.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ─── Response ───────────────────────────────────────────────────────────────

/// Response body from the transcription endpoint.
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Reject transcripts that carry no usable text.
fn transcript_from(response: TranscriptionResponse) -> Result<String, SpeechError> {
    let text = response.text.trim().to_string();
    if text.is_empty() {
        return Err(SpeechError::AudioNotUnderstood);
    }
    Ok(text)
}

// ─── TranscriptionClient ────────────────────────────────────────────────────

/// Client for the audio transcription endpoint.
pub struct TranscriptionClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl TranscriptionClient {
    /// Create a client from settings.
    pub fn new(settings: &Settings) -> Result<Self, SpeechError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SpeechError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
            api_key: settings.openai_api_key.clone(),
        })
    }

    /// Transcribe one recording into text.
    ///
    /// Returns [`SpeechError::AudioNotUnderstood`] when the service answers
    /// with an empty transcript, and [`SpeechError::ServiceError`] /
    /// [`SpeechError::RequestFailed`] for transport-level failures.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<String, SpeechError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::info!(bytes = audio.len(), "transcribing recorded audio");

        let form = Form::new()
            .part("file", Part::bytes(audio).file_name(AUDIO_FILENAME))
            .text("model", TRANSCRIPTION_MODEL);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranscriptionResponse =
            response.json().await.map_err(|e| SpeechError::RequestFailed {
                reason: format!("malformed transcription response: {e}"),
            })?;

        transcript_from(parsed)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_trims_whitespace() {
        let resp = TranscriptionResponse {
            text: "  what's the SEO score for example.com  \n".to_string(),
        };
        assert_eq!(
            transcript_from(resp).unwrap(),
            "what's the SEO score for example.com"
        );
    }

    #[test]
    fn test_blank_transcript_is_not_understood() {
        let resp = TranscriptionResponse {
            text: "   \n".to_string(),
        };
        assert!(matches!(
            transcript_from(resp),
            Err(SpeechError::AudioNotUnderstood)
        ));
    }

    #[test]
    fn test_response_deserializes() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(parsed.text, "hello");
    }
}
