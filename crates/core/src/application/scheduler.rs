// Closing Scheduler
// Invokes the closing pass on a fixed cadence

use super::closer::{AuctionCloser, ClosingResult};
use crate::error::Result;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

/// Closing scheduler
///
/// Runs one closing pass per tick. Passes never overlap: the next tick is only
/// considered once the current pass has returned.
pub struct ClosingScheduler {
    closer: AuctionCloser,
    interval: Duration,
}

impl ClosingScheduler {
    /// Create a new closing scheduler
    ///
    /// # Arguments
    /// * `closer` - Closing service
    /// * `interval` - How often to run a pass
    pub fn new(closer: AuctionCloser, interval: Duration) -> Self {
        Self { closer, interval }
    }

    /// Run closing loop (background task)
    ///
    /// The first pass runs immediately. A pass that fails to list auctions is
    /// logged and retried on the next tick.
    pub async fn run(self) {
        info!(
            interval_secs = self.interval.as_secs(),
            threshold_days = self.closer.policy().threshold_days(),
            "Closing scheduler started"
        );

        let mut tick = interval(self.interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tick.tick().await;

            match self.closer.run().await {
                Ok(result) => {
                    info!(
                        closed_count = result.closed_count,
                        "Scheduled closing pass completed"
                    );
                }
                Err(e) => {
                    error!(error = ?e, "Scheduled closing pass failed");
                }
            }
        }
    }

    /// Run a pass immediately (for manual trigger or one-shot mode)
    pub async fn run_now(&self) -> Result<ClosingResult> {
        info!("Running manual closing pass...");

        let result = self.closer.run().await?;

        info!(
            closed_count = result.closed_count,
            "Manual closing pass completed"
        );

        Ok(result)
    }
}
