//! Logging - tracing subscriber setup
//!
//! Logs go to stdout and to a daily-rotated file in the platform data
//! directory. `RUST_LOG` takes precedence over the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_FILE_NAME;
use crate::utils::config_store::log_dir;

/// Build the filter: `RUST_LOG` if set, else `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive for the lifetime of the process. `None` means file logging could
/// not be set up and only stdout is used.
pub fn init(default_level: &str) -> Option<WorkerGuard> {
    let stdout_layer = fmt::layer().with_target(false);

    match log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter(default_level))
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(env_filter(default_level))
                .with(stdout_layer)
                .init();
            tracing::warn!(error = %err, "File logging disabled");
            None
        }
    }
}
