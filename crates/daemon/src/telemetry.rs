//! Logging setup
//!
//! stdout gets pretty or JSON output depending on `AUCTION_CLOSER_LOG_FORMAT`.
//! When `AUCTION_CLOSER_LOG_DIR` is set, a daily rolling JSON file is written
//! as well.
//!
//! # Example
//!
//! ```text
//! RUST_LOG=auction_closer=debug \
//! AUCTION_CLOSER_LOG_FORMAT=json \
//! AUCTION_CLOSER_LOG_DIR=/var/log/auction-closer \
//!     ./auction-closer
//! ```

use crate::config::{LogConfig, LogFormat};
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "auction-closer.log";

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the process.
pub fn init_tracing(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("auction_closer=info"))?;

    let stdout_layer = match config.format {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
