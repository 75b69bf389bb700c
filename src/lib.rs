pub mod actions;
pub mod agent_core;
pub mod commands;
pub mod config;
pub mod inference;
pub mod speech;

use actions::{ActionRegistry, SeoPageReport};
use agent_core::AgentEngine;
use config::Settings;
use inference::ChatClient;
use speech::TranscriptionClient;

/// Async mutex for types that require `.await` while held.
pub type TokioMutex<T> = tokio::sync::Mutex<T>;

/// Return the platform-standard data directory for SEOScout.
///
/// - macOS: `~/Library/Application Support/com.seoscout.app/`
/// - Windows: `{FOLDERID_RoamingAppData}\seoscout\`
/// - Linux: `$XDG_DATA_HOME/com.seoscout.app/` (fallback `~/.local/share/...`)
///
/// Falls back to `~/.seoscout/` only if none of the above can be resolved.
pub(crate) fn data_dir() -> std::path::PathBuf {
    if let Some(dir) = dirs::data_dir() {
        return dir.join("com.seoscout.app");
    }
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".seoscout")
}

/// Initialize the tracing subscriber — writes structured logs to the app data directory.
///
/// On each app startup:
/// 1. Rotates existing logs (agent.log → agent.log.1 → .2 → .3, keeps last 3).
/// 2. Opens a fresh agent.log with a line-flushing writer for crash resilience.
/// 3. Logs a startup banner with the data directory path for discoverability.
fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = data_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let log_path = log_dir.join("agent.log");

    // Rotate: agent.log.2 → .3, .1 → .2, agent.log → .1
    rotate_log_file(&log_path, 3);

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("failed to open agent.log");

    let flushing_writer = FlushingWriter::new(log_file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("seoscout_lib=info,warn"));

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(flushing_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    // Startup banner — makes it easy to find the right log file
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %log_dir.display(),
        log_file = %log_path.display(),
        pid = std::process::id(),
        "=== SEOScout starting ==="
    );
}

/// Rotate log files: `agent.log` → `agent.log.1` → `.2` → … → `.{keep}`.
///
/// Oldest file beyond `keep` is deleted. Missing files in the chain are skipped.
fn rotate_log_file(base_path: &std::path::Path, keep: u32) {
    // Delete the oldest
    let oldest = format!("{}.{keep}", base_path.display());
    let _ = std::fs::remove_file(&oldest);

    // Shift: .{n-1} → .{n}
    for i in (1..keep).rev() {
        let from = format!("{}.{i}", base_path.display());
        let to = format!("{}.{}", base_path.display(), i + 1);
        let _ = std::fs::rename(&from, &to);
    }

    // Current → .1
    if base_path.exists() {
        let to = format!("{}.1", base_path.display());
        let _ = std::fs::rename(base_path, &to);
    }
}

/// A writer that wraps `std::fs::File` and flushes after every write.
///
/// `tracing-subscriber` buffers log output internally. Without explicit
/// flushing, log entries may sit in OS buffers and be lost on crash.
/// This wrapper ensures each log line is on disk immediately.
///
/// Performance impact is minimal for a desktop app (~100 log lines/minute).
#[derive(Clone)]
struct FlushingWriter {
    file: std::sync::Arc<std::sync::Mutex<std::fs::File>>,
}

impl FlushingWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: std::sync::Arc::new(std::sync::Mutex::new(file)),
        }
    }
}

impl std::io::Write for FlushingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut f = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("lock poisoned: {e}")))?;
        let n = std::io::Write::write(&mut *f, buf)?;
        std::io::Write::flush(&mut *f)?;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut f = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("lock poisoned: {e}")))?;
        std::io::Write::flush(&mut *f)
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FlushingWriter {
    type Writer = FlushingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Build the fixed action registry: one bundled SEO audit action.
fn build_registry(settings: &Settings) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    match SeoPageReport::new(settings) {
        Ok(action) => registry.register(Box::new(action)),
        Err(e) => tracing::error!(error = %e, "failed to initialize SEO audit action"),
    }
    tracing::info!(actions = ?registry.names(), "action registry initialized");
    registry
}

/// Run the Tauri application.
pub fn run() {
    // Initialize tracing FIRST — before any tracing::info!() calls
    init_tracing();

    let settings = Settings::from_env();

    let chat_client = ChatClient::new(&settings).expect("failed to build chat client");
    let transcription =
        TranscriptionClient::new(&settings).expect("failed to build transcription client");

    let registry = build_registry(&settings);
    let engine = AgentEngine::new(chat_client, registry, settings.agent_model.clone());

    tracing::info!(
        agent_model = %settings.agent_model,
        default_model = %settings.default_model,
        "agent engine initialized"
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(TokioMutex::new(engine))
        .manage(transcription)
        .invoke_handler(tauri::generate_handler![
            commands::query::submit_query,
            commands::speech::transcribe_query,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_log_file_shifts_chain() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("agent.log");

        std::fs::write(&base, "current").unwrap();
        std::fs::write(format!("{}.1", base.display()), "old-1").unwrap();
        std::fs::write(format!("{}.2", base.display()), "old-2").unwrap();

        rotate_log_file(&base, 3);

        assert!(!base.exists());
        assert_eq!(
            std::fs::read_to_string(format!("{}.1", base.display())).unwrap(),
            "current"
        );
        assert_eq!(
            std::fs::read_to_string(format!("{}.2", base.display())).unwrap(),
            "old-1"
        );
        assert_eq!(
            std::fs::read_to_string(format!("{}.3", base.display())).unwrap(),
            "old-2"
        );
    }

    #[test]
    fn test_rotate_log_file_drops_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("agent.log");

        std::fs::write(&base, "current").unwrap();
        std::fs::write(format!("{}.3", base.display()), "ancient").unwrap();

        rotate_log_file(&base, 3);

        // .3 held the oldest log; after rotation it must not contain it.
        let third = std::fs::read_to_string(format!("{}.3", base.display())).ok();
        assert_ne!(third.as_deref(), Some("ancient"));
    }

    #[test]
    fn test_rotate_log_file_missing_files_ok() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("agent.log");
        // Nothing exists yet — must not panic.
        rotate_log_file(&base, 3);
        assert!(!base.exists());
    }
}
