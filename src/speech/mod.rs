//! Speech capture — transcribes recorded audio into a query string.
//!
//! Strictly a shell-boundary concern: transcription failures surface as
//! user-facing dialogs and never reach the agent loop.

pub mod client;
pub mod errors;

pub use client::TranscriptionClient;
pub use errors::SpeechError;
