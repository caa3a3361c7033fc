//! Logging Infrastructure
//!
//! Structured logging via `tracing`: stdout by default, daily rolling files
//! when a log directory is configured.

use std::path::{Path, PathBuf};

const LOG_FILE_PREFIX: &str = "order-desk";

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.and_then(resolve_log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}

/// Log directory to write to, if it is set and exists
pub fn resolve_log_dir(dir: &str) -> Option<PathBuf> {
    let dir = dir.trim();
    if dir.is_empty() {
        return None;
    }
    let path = Path::new(dir);
    path.is_dir().then(|| path.to_path_buf())
}
