//! Speech-to-text command.
//!
//! The frontend records audio (MediaRecorder), base64-encodes it, and asks
//! for a transcript to drop into the query box. All failures are surfaced
//! here as dialog strings — they never reach the agent loop.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::speech::{SpeechError, TranscriptionClient};

/// Transcribe a base64-encoded recording into query text.
#[tauri::command]
pub async fn transcribe_query(
    audio_base64: String,
    transcription: tauri::State<'_, TranscriptionClient>,
) -> Result<String, String> {
    let audio = decode_audio(&audio_base64).map_err(|e| e.to_string())?;

    transcription.transcribe(audio).await.map_err(|e| {
        tracing::warn!(error = %e, "speech recognition failed");
        e.to_string()
    })
}

/// Decode the frontend's base64 payload into raw audio bytes.
fn decode_audio(audio_base64: &str) -> Result<Vec<u8>, SpeechError> {
    let audio = BASE64
        .decode(audio_base64)
        .map_err(|e| SpeechError::InvalidAudio {
            reason: e.to_string(),
        })?;

    if audio.is_empty() {
        return Err(SpeechError::InvalidAudio {
            reason: "empty recording".to_string(),
        });
    }

    Ok(audio)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
