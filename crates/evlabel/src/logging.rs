//! Logging setup for the labeler.
//!
//! Installs a global tracing subscriber that writes to stderr and appends
//! to a log file. Call once at start-up and keep the returned guard alive.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be created or opened for appending.
    #[error("Failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A global tracing subscriber was already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to write to stderr and `log_file`.
///
/// Verbosity defaults to `info` and follows `RUST_LOG` when set.
pub fn init(log_file: &Path) -> Result<WorkerGuard, LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| LoggingError::OpenLogFile {
            path: log_file.to_path_buf(),
            source,
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let console_layer = fmt::layer().with_writer(std::io::stderr);
    let file_layer = fmt::layer().with_ansi(false).with_writer(file_writer);

    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(console_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!("Logging initialized; log file at {}", log_file.display());
    Ok(guard)
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
