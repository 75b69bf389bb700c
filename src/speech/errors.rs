//! Speech recognition error types.

use thiserror::Error;

/// Errors that can occur while turning recorded audio into text.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The audio payload from the frontend could not be decoded.
    #[error("invalid audio payload: {reason}")]
    InvalidAudio { reason: String },

    /// The service produced no usable text for the recording.
    #[error("could not understand the audio")]
    AudioNotUnderstood,

    /// The transcription request failed before a response arrived.
    #[error("transcription request failed: {reason}")]
    RequestFailed { reason: String },

    /// The transcription service answered with a non-2xx status.
    #[error("HTTP {status} from transcription service: {body}")]
    ServiceError { status: u16, body: String },
}
