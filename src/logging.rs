//! Logging bootstrap for host applications.
//!
//! Library code only emits through the `log` facade; hosts that want the
//! diagnostics on disk call [`init_logging`] once at startup. The
//! bootstrap is idempotent for the same directory and rejects attempts
//! to re-route an already-initialized logger.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "corkboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Errors returned by the logging bootstrap.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory is unusable.
    #[error("invalid log directory `{dir}`: {reason}")]
    InvalidDirectory {
        /// The rejected directory value.
        dir: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Logging is already active with a different directory.
    #[error("logging already initialized at `{active}`; refusing to switch to `{requested}`")]
    AlreadyInitialized {
        /// The directory logging currently writes to.
        active: String,
        /// The conflicting directory from this call.
        requested: String,
    },

    /// The logger backend failed to start.
    #[error("failed to start logger: {0}")]
    Backend(String),
}

/// Initializes file-based rolling logs exactly once per process.
///
/// Repeat calls with the same directory are idempotent no-ops.
///
/// # Errors
///
/// Returns [`LoggingError`] when the directory is empty, relative, or
/// cannot be created, when logging is already active elsewhere, or when
/// the backend fails to start.
pub fn init_logging(spec: &str, log_dir: &str) -> Result<(), LoggingError> {
    let normalized_dir = normalize_log_dir(log_dir)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == normalized_dir {
            return Ok(());
        }
        return Err(LoggingError::AlreadyInitialized {
            active: state.log_dir.display().to_string(),
            requested: normalized_dir.display().to_string(),
        });
    }

    let init_dir = normalized_dir.clone();
    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        std::fs::create_dir_all(&init_dir).map_err(|err| LoggingError::InvalidDirectory {
            dir: init_dir.display().to_string(),
            reason: err.to_string(),
        })?;

        let logger = Logger::try_with_str(spec)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_file(
                FileSpec::default()
                    .directory(init_dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        info!("logging initialized at {}", init_dir.display());

        Ok(LoggingState {
            log_dir: init_dir,
            _logger: logger,
        })
    })?;

    if state.log_dir == normalized_dir {
        Ok(())
    } else {
        Err(LoggingError::AlreadyInitialized {
            active: state.log_dir.display().to_string(),
            requested: normalized_dir.display().to_string(),
        })
    }
}

/// Returns the active log directory, or `None` before initialization.
#[must_use]
pub fn logging_status() -> Option<PathBuf> {
    LOGGING_STATE.get().map(|state| state.log_dir.clone())
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidDirectory {
            dir: log_dir.to_owned(),
            reason: "directory cannot be empty".to_owned(),
        });
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidDirectory {
            dir: log_dir.to_owned(),
            reason: "directory must be an absolute path".to_owned(),
        });
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::normalize_log_dir;

    #[test]
    fn normalize_log_dir_rejects_relative_path() {
        let error = normalize_log_dir("logs/dev").expect_err("relative paths must be rejected");
        assert!(error.to_string().contains("absolute"));
    }

    #[test]
    fn normalize_log_dir_rejects_empty_path() {
        let error = normalize_log_dir("  ").expect_err("blank paths must be rejected");
        assert!(error.to_string().contains("empty"));
    }
}
