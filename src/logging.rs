//! Tracing setup for the command line tool
//!
//! Logs go to stderr (or a file) so they never mix with the Provides report
//! on stdout. `RUST_LOG` takes precedence over the `--log-level` flag.

use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::EnvFilter;

/// Log output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line format
    #[default]
    Text,
    /// Structured JSON format
    Json,
}

/// Log level options for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Show all logs (trace level)
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above
    Info,
    /// Show warnings and above (default)
    #[default]
    Warn,
    /// Show errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gomod2rpmdeps={}", Level::from(level))))
}

/// Install the global subscriber.
///
/// When `log_file` is given, logs are appended there through a background
/// writer; the returned guard must be kept alive until exit so buffered
/// records are flushed.
pub fn init_tracing(
    level: LogLevel,
    format: LogFormat,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("invalid log file path: {}", path.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir.unwrap_or(Path::new(".")))
                .map_err(|e| anyhow::anyhow!("failed to open log file {}: {e}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (tracing_subscriber::fmt::writer::BoxMakeWriter::new(writer), Some(guard))
        }
        None => (
            tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr),
            None,
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(log_file.is_none());

    let result = match format {
        LogFormat::Text => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LogLevel::Trace, Level::TRACE)]
    #[case(LogLevel::Debug, Level::DEBUG)]
    #[case(LogLevel::Info, Level::INFO)]
    #[case(LogLevel::Warn, Level::WARN)]
    #[case(LogLevel::Error, Level::ERROR)]
    fn log_level_converts_to_tracing_level(#[case] level: LogLevel, #[case] expected: Level) {
        assert_eq!(Level::from(level), expected);
    }

    #[test]
    fn init_tracing_fails_when_log_directory_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("file");
        std::fs::write(&not_a_dir, "").unwrap();

        let log_file = not_a_dir.join("logs").join("gomod2rpmdeps.log");

        let result = init_tracing(LogLevel::Warn, LogFormat::Text, Some(log_file.as_path()));

        assert!(result.is_err());
    }

    #[test]
    fn log_level_defaults_to_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }
}
