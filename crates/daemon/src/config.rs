//! Daemon configuration resolved from environment variables

use auction_closer_core::domain::{ClosingPolicy, DEFAULT_CLOSING_THRESHOLD_DAYS};
use auction_closer_core::{AppError, Result};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_DB_PATH: &str = "~/.auction-closer/auctions.db";
const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    Pretty,
    /// Production: JSON structured logging
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// When set, a daily rolling JSON log file is written here as well
    pub dir: Option<PathBuf>,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub db_path: String,
    pub interval: Duration,
    pub policy: ClosingPolicy,
    pub run_once: bool,
    pub log: LogConfig,
}

impl DaemonConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("AUCTION_CLOSER_DB_PATH")
            .unwrap_or_else(|| shellexpand::tilde(DEFAULT_DB_PATH).into_owned());

        let interval_secs: u64 = parse_var(
            &lookup,
            "AUCTION_CLOSER_INTERVAL_SECS",
            DEFAULT_INTERVAL_SECS,
        )?;
        if interval_secs == 0 {
            return Err(AppError::Config(
                "AUCTION_CLOSER_INTERVAL_SECS must be greater than 0".to_string(),
            ));
        }

        let threshold_days: i64 = parse_var(
            &lookup,
            "AUCTION_CLOSER_THRESHOLD_DAYS",
            DEFAULT_CLOSING_THRESHOLD_DAYS,
        )?;
        let policy = ClosingPolicy::new(threshold_days)?;

        let run_once = match lookup("AUCTION_CLOSER_RUN_ONCE") {
            Some(raw) => parse_flag("AUCTION_CLOSER_RUN_ONCE", &raw)?,
            None => false,
        };

        let format = lookup("AUCTION_CLOSER_LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or(LogFormat::Pretty);
        let dir = lookup("AUCTION_CLOSER_LOG_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| PathBuf::from(shellexpand::tilde(&raw).into_owned()));

        Ok(Self {
            db_path,
            interval: Duration::from_secs(interval_secs),
            policy,
            run_once,
            log: LogConfig { format, dir },
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean (got {:?})",
            key, other
        ))),
    }
}
