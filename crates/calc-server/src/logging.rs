//! Process-wide logging setup.
//!
//! Installs a single `tracing` subscriber with three sinks:
//! - console: compact human readable lines
//! - `<dir>/error.log`: JSON lines, ERROR level only
//! - `<dir>/combined.log`: JSON lines, every enabled level
//!
//! The files are append-only and written through non-blocking writers.
//! Keep the returned [`LogGuards`] alive for the lifetime of the process;
//! dropping them flushes and closes the files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::settings::LoggingConfig;

/// File receiving ERROR records only.
pub const ERROR_LOG_FILE: &str = "error.log";

/// File receiving every record.
pub const COMBINED_LOG_FILE: &str = "combined.log";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Flush guards of the non-blocking file writers.
#[must_use = "dropping the guards stops the file writers"]
pub struct LogGuards {
    guards: Vec<WorkerGuard>,
}

impl LogGuards {
    /// Returns true if file sinks are active.
    pub fn has_file_sinks(&self) -> bool {
        !self.guards.is_empty()
    }
}

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level`.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuards, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let console = fmt::layer().compact().with_target(false);

    let mut guards = Vec::new();
    let (error_layer, combined_layer) = if config.file_enabled {
        let (error_writer, error_guard) = file_writer(&config.dir, ERROR_LOG_FILE)?;
        let (combined_writer, combined_guard) = file_writer(&config.dir, COMBINED_LOG_FILE)?;
        guards.push(error_guard);
        guards.push(combined_guard);

        let error_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_ansi(false)
            .with_writer(error_writer)
            .with_filter(filter_fn(error_sink_enabled));

        let combined_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_ansi(false)
            .with_writer(combined_writer);

        (Some(error_layer), Some(combined_layer))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(error_layer)
        .with(combined_layer)
        .try_init()?;

    Ok(LogGuards { guards })
}

/// ERROR events only. Spans stay enabled so error records keep the request
/// context (service, request id, path).
fn error_sink_enabled(metadata: &Metadata<'_>) -> bool {
    metadata.is_span() || *metadata.level() == Level::ERROR
}

/// Opens `<dir>/<file_name>` for appending behind a non-blocking writer.
fn file_writer(dir: &Path, file_name: &str) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let (prefix, suffix) = file_name.rsplit_once('.').unwrap_or((file_name, "log"));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(prefix)
        .filename_suffix(suffix)
        .build(dir)?;

    Ok(tracing_appender::non_blocking(appender))
}
