//! Tauri IPC commands exposed to the frontend.
//!
//! Each command is callable via `invoke("command_name", { args })` from
//! the frontend code. Errors cross the IPC boundary as strings; the
//! frontend renders them in dialogs.

pub mod query;
pub mod speech;
