//! Logging bootstrap for the DVD library.
//!
//! # Responsibility
//! - Initialize file-based rolling logs at most once per process.
//!
//! # Invariants
//! - Initialization is idempotent for the same directory.
//! - Re-initialization with a different directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "dvdlibrary";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes file logging at `level` into `log_dir`.
///
/// Returns `Ok(())` when logging is active, or a human-readable error
/// string when initialization fails.
///
/// # Errors
/// - Returns an error when `log_dir` cannot be created.
/// - Returns an error when logging is already active in another directory.
/// - Returns an error when the logger backend rejects `level`.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> Result<(), String> {
    let log_dir = log_dir.as_ref().to_path_buf();

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    LOGGING_STATE
        .get_or_try_init(|| -> Result<LoggingState, String> {
            std::fs::create_dir_all(&log_dir).map_err(|err| {
                format!(
                    "failed to create log directory `{}`: {err}",
                    log_dir.display()
                )
            })?;

            let logger = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_file(
                    FileSpec::default()
                        .directory(log_dir.as_path())
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
                .map_err(|err| format!("failed to start logger: {err}"))?;

            Ok(LoggingState {
                log_dir: log_dir.clone(),
                _logger: logger,
            })
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "dvdlibrary-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn init_is_idempotent_for_same_dir_and_rejects_conflicts() {
        let log_dir = unique_temp_dir("first");
        let other_dir = unique_temp_dir("second");

        init_logging("info", &log_dir).expect("first init should succeed");
        init_logging("info", &log_dir).expect("same directory should be idempotent");

        let err = init_logging("info", &other_dir).expect_err("directory conflict should fail");
        assert!(err.contains("refusing to switch"));
    }
}
