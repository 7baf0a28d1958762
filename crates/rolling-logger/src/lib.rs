//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to the console and to a daily
//! rolling log file. Records emitted through the `log` facade are forwarded
//! to the same subscriber.

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default number of daily files kept in the log directory
pub const DEFAULT_KEEP_FILES: usize = 7;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to create log directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file in {path}: {source}")]
    Appender {
        path: PathBuf,
        #[source]
        source: InitError,
    },

    #[error("Invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub log_dir: PathBuf,
    pub app_name: String,
    /// `EnvFilter` directive, e.g. `info` or `kanban=debug,tower_http=warn`
    pub filter: String,
    pub keep_files: usize,
}

impl LoggerOptions {
    pub fn new(log_dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            log_dir: log_dir.into(),
            app_name: app_name.to_string(),
            filter: "info".to_string(),
            keep_files: DEFAULT_KEEP_FILES,
        }
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = filter.to_string();
        self
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.filter).map_err(|e| LoggerError::Filter {
            filter: self.filter.clone(),
            message: e.to_string(),
        })
    }

    /// `<app>.<date>.log` in `log_dir`, rotated daily
    fn file_appender(&self) -> Result<RollingFileAppender, LoggerError> {
        std::fs::create_dir_all(&self.log_dir).map_err(|source| LoggerError::Io {
            path: self.log_dir.clone(),
            source,
        })?;

        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&self.app_name)
            .filename_suffix("log")
            .max_log_files(self.keep_files.max(1))
            .build(&self.log_dir)
            .map_err(|source| LoggerError::Appender {
                path: self.log_dir.clone(),
                source,
            })
    }
}

/// Initialize the global subscriber. Fails if one is already installed.
///
/// The returned guard flushes the file writer when dropped; hold it for the
/// life of the process.
pub fn init_with(options: LoggerOptions) -> Result<WorkerGuard, LoggerError> {
    let filter = options.env_filter()?;
    let (file_writer, guard) = tracing_appender::non_blocking(options.file_appender()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        app = %options.app_name,
        dir = %options.log_dir.display(),
        started = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "logging initialized"
    );
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected_before_install() {
        let dir = tempfile::tempdir().unwrap();
        let options = LoggerOptions::new(dir.path(), "kanban").with_filter("kanban=[[");

        match init_with(options) {
            Err(LoggerError::Filter { filter, .. }) => assert_eq!(filter, "kanban=[["),
            other => panic!("Expected Filter error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_options_defaults() {
        let options = LoggerOptions::new("/tmp/logs", "kanban");
        assert_eq!(options.filter, "info");
        assert_eq!(options.keep_files, DEFAULT_KEEP_FILES);
    }

    #[test]
    fn test_file_appender_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let options = LoggerOptions::new(dir.path().join("nested").join("logs"), "kanban");
        options.file_appender().unwrap();
        assert!(options.log_dir.is_dir());
    }

    #[test]
    fn test_file_appender_fails_under_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let options = LoggerOptions::new(blocker.join("logs"), "kanban");
        assert!(matches!(options.file_appender(), Err(LoggerError::Io { .. })));
    }
}
