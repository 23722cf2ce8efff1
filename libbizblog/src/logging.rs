//! Centralized logging configuration for BizBlog binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to stderr or to a log file (the TUI owns the terminal)
//!
//! # Examples
//!
//! ```no_run
//! use libbizblog::logging::{LoggingConfig, LogFormat, LogTarget};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
//!     .with_target(LogTarget::File("/tmp/bizblog.log".into()));
//! config.init().expect("logging");
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{BlogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to; parent directories are created on init
    File(PathBuf),
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    pub target: LogTarget,
}

impl LoggingConfig {
    /// Create a new logging configuration writing to stderr
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            target: LogTarget::Stderr,
        }
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    fn filter(&self) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        match &self.target {
            LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            LogTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        BlogError::InvalidInput(format!(
                            "Cannot create log directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        BlogError::InvalidInput(format!(
                            "Cannot open log file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program. Fails if the
    /// log file cannot be opened or a global subscriber is already set.
    pub fn init(&self) -> Result<()> {
        let filter = self.filter();
        let writer = self.writer()?;
        // Colors only make sense on a terminal
        let ansi = self.target == LogTarget::Stderr;

        let installed = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        installed.map_err(|e| BlogError::InvalidInput(format!("Logging already initialized: {}", e)))
    }
}

/// Build a logging configuration from the environment
///
/// Respects `BIZBLOG_LOG_FORMAT`, `BIZBLOG_LOG_LEVEL` and `BIZBLOG_LOG_FILE`.
/// Falls back to text format, info level, stderr.
pub fn config_from_env() -> LoggingConfig {
    let format = std::env::var("BIZBLOG_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("BIZBLOG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let target = std::env::var("BIZBLOG_LOG_FILE")
        .map(|path| LogTarget::File(PathBuf::from(shellexpand::tilde(&path).to_string())))
        .unwrap_or(LogTarget::Stderr);

    LoggingConfig::new(format, level, false).with_target(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result
            .unwrap_err()
            .contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_new_targets_stderr() {
        let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), true);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(config.verbose);
        assert_eq!(config.target, LogTarget::Stderr);
    }

    #[test]
    fn test_file_writer_creates_parent_dirs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("bizblog.log");
        let config = LoggingConfig::new(LogFormat::Text, "info".to_string(), false)
            .with_target(LogTarget::File(path.clone()));

        assert!(config.writer().is_ok());
        assert!(path.exists());
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var("BIZBLOG_LOG_FORMAT", "json");
        std::env::set_var("BIZBLOG_LOG_LEVEL", "trace");
        std::env::set_var("BIZBLOG_LOG_FILE", "/tmp/bizblog-test.log");

        let config = config_from_env();

        std::env::remove_var("BIZBLOG_LOG_FORMAT");
        std::env::remove_var("BIZBLOG_LOG_LEVEL");
        std::env::remove_var("BIZBLOG_LOG_FILE");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "trace");
        assert_eq!(
            config.target,
            LogTarget::File(PathBuf::from("/tmp/bizblog-test.log"))
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        std::env::remove_var("BIZBLOG_LOG_FORMAT");
        std::env::remove_var("BIZBLOG_LOG_LEVEL");
        std::env::remove_var("BIZBLOG_LOG_FILE");

        let config = config_from_env();
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "info");
        assert_eq!(config.target, LogTarget::Stderr);
    }
}
