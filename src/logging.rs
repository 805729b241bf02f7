//! Tracing subscriber setup for the command-line tool
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! When [`LogConfig::file`] is set, JSON lines are also appended to
//! [`log_path`](crate::config::log_path).

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LOG_ENV, LogConfig, log_path};

/// Build the filter: `LOOSEVER_LOG` wins over the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Initialize the global subscriber.
///
/// The returned guard must be held until exit so buffered file output is
/// flushed.
pub fn init(config: &LogConfig) -> io::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(true);

    let (file_layer, guard) = if config.file {
        let path = log_path();
        let dir = path.parent().map(|p| p.to_path_buf()).unwrap_or_default();
        std::fs::create_dir_all(&dir)?;
        let file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
