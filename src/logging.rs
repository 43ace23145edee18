//! Logging initialization for stepwise.
//!
//! Logs go to stderr unless `logging.to_file` is set, in which case they go
//! to `{state}/logs/stepwise-{datetime}.log` and stdout stays clean for the
//! check fields.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Guard that must be kept alive for the duration of the program.
    /// When dropped, ensures all buffered logs are flushed.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Log file name for a run started at `timestamp`
pub fn log_file_name(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    format!("stepwise-{}.log", timestamp.format("%Y%m%dT%H%M%SZ"))
}

/// Level filter to use: `debug` when forced, else the configured level
pub fn effective_level(config: &Config, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    }
}

/// Subscriber type produced by [`build_subscriber`]
pub type BoxedSubscriber = Box<dyn tracing::Subscriber + Send + Sync + 'static>;

/// Build the subscriber for `config` without installing it.
///
/// `RUST_LOG` takes precedence over both the configured level and
/// `debug_override`. With `logging.to_file` the logs directory is created
/// and the handle carries the log file path.
pub fn build_subscriber(
    config: &Config,
    debug_override: bool,
) -> Result<(BoxedSubscriber, LoggingHandle)> {
    let log_level = effective_level(config, debug_override);
    let filter =
        tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(log_level));

    if !config.logging.to_file {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );

        return Ok((
            Box::new(subscriber),
            LoggingHandle {
                _guard: None,
                log_file_path: None,
            },
        ));
    }

    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let log_filename = log_file_name(chrono::Utc::now());
    let log_file_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(non_blocking),
    );

    Ok((
        Box::new(subscriber),
        LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        },
    ))
}

/// Initialize logging as the global subscriber.
///
/// The returned handle must be kept alive for the duration of the program.
pub fn init_logging(config: &Config, debug_override: bool) -> Result<LoggingHandle> {
    let (subscriber, handle) = build_subscriber(config, debug_override)?;
    subscriber
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(handle)
}
