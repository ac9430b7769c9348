//! Tracing setup.
//!
//! The terminal UI owns the screen, so it logs to a file. Headless mode logs
//! to stderr. Both honour RUST_LOG and default to `info`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Default log file for the terminal UI.
pub const DEFAULT_LOG_FILE: &str = "monopoly.log";

/// Errors from installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("tracing init failed: {0}")]
    Init(String),
}

/// Filter from RUST_LOG, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })
}

/// Build a subscriber that writes plain-text events to `file`.
pub fn file_subscriber(
    file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// Install a global subscriber writing to the file at `path`.
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))
        .map_err(|e| LoggingError::Init(e.to_string()))
}

/// Install a global subscriber writing to stderr.
pub fn init_stderr_logging() -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_subscriber_writes_events() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.log");
        let file = open_log_file(&path).unwrap();

        let subscriber = file_subscriber(file, EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(ticket = "#1", "Error in request");
            tracing::debug!("filtered out");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Error in request"));
        assert!(contents.contains("#1"));
        assert!(!contents.contains("filtered out"));
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("append.log");
        std::fs::write(&path, "first\n").unwrap();

        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_missing_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("table.log");
        assert!(matches!(
            open_log_file(&path),
            Err(LoggingError::Open { .. })
        ));
    }
}
