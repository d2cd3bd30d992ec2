//! Logging - tracing Subscriber Setup
//!
//! Console output always; a daily rolling file under the platform data
//! directory when `[log] file = true`.

use snafu::ResultExt;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::domain::config::LogConfig;
use crate::error::{LogInitSnafu, LogInstallSnafu, Result};
use crate::utils::config_store;

const LOG_FILE_PREFIX: &str = "pricing-admin";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// `RUST_LOG` wins over the configured level
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_target(false)
        .with_filter(env_filter(config));

    let (file, guard) = if config.file {
        match config_store::log_dir() {
            Ok(dir) => {
                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(LOG_FILE_PREFIX)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(MAX_LOG_FILES)
                    .build(&dir)
                    .context(LogInitSnafu)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_timer(LocalTime::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(env_filter(config));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("log directory unavailable, logging to console only: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context(LogInstallSnafu)?;

    Ok(guard)
}
