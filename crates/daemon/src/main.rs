//! Auction Closer - Main Entry Point
//! Closes week-old auctions on a fixed cadence

mod config;
mod notifier;
mod telemetry;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// Import workspace crates
use auction_closer_core::application::{AuctionCloser, ClosingScheduler};
use auction_closer_core::port::SystemTimeProvider;
use auction_closer_infra_sqlite::{create_pool, run_migrations, SqliteAuctionRepository};
use crate::config::DaemonConfig;
use crate::notifier::LogNotifier;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env().context("Invalid configuration")?;

    // 2. Initialize logging (guard must outlive every log call)
    let _log_guard = telemetry::init_tracing(&config.log)?;

    info!(
        "Auction Closer v{} (core v{}) starting...",
        VERSION,
        auction_closer_core::VERSION
    );

    // 3. Initialize database
    info!(db_path = %config.db_path, "Initializing database...");

    if let Some(parent) = Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create {}", parent.display()))?;
        }
    }

    let pool = create_pool(&config.db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Setup dependencies (DI wiring)
    let repository = Arc::new(SqliteAuctionRepository::new(pool.clone()));
    let notifier = Arc::new(LogNotifier::new());
    let time_provider = Arc::new(SystemTimeProvider);

    let closer = AuctionCloser::new(repository, notifier, time_provider, config.policy);
    let scheduler = ClosingScheduler::new(closer, config.interval);

    // 5. One-shot mode (cron, manual trigger)
    if config.run_once {
        let result = scheduler.run_now().await?;
        info!(closed_count = result.closed_count, "Single pass finished");
        pool.close().await;
        return Ok(());
    }

    // 6. Scheduled mode until Ctrl+C
    info!("Press Ctrl+C to shutdown");

    tokio::select! {
        _ = scheduler.run() => {}
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received. Exiting gracefully...");
        }
    }

    pool.close().await;
    info!("Shutdown complete.");

    Ok(())
}
