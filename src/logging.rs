//! File logging for the CLI and TUI.
//!
//! stdout and stderr belong to the terminal UI and command output, so every
//! log record goes to rotating files under `<data dir>/logs/`.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

/// Environment variable that overrides the configured level
pub const LOG_ENV: &str = "CHORE_LOG";

const LOG_FILE_BASENAME: &str = "chore";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log spec `{spec}`: {source}")]
    InvalidSpec {
        spec: String,
        source: flexi_logger::FlexiLoggerError,
    },
    #[error("failed to start logger: {0}")]
    Start(#[source] flexi_logger::FlexiLoggerError),
}

/// Directory the log files go into
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// The effective level spec: `CHORE_LOG` if set and non-blank, else `configured`.
pub fn effective_level(configured: &str, env_value: Option<&str>) -> String {
    match env_value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => configured.trim().to_string(),
    }
}

/// Start file logging. Keep the returned handle alive for the whole process;
/// dropping it flushes and stops the logger.
pub fn init_logging(level: &str, dir: &Path) -> Result<LoggerHandle, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|e| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|e| LoggingError::InvalidSpec {
            spec: level.to_string(),
            source: e,
        })?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Start)?;

    log::info!(
        "chore {} started, level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        dir.display()
    );
    Ok(handle)
}
