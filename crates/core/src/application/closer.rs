// Auction closing pass
use crate::domain::{Auction, ClosingPolicy};
use crate::error::Result;
use crate::port::{AuctionRepository, Notifier, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one closing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosingResult {
    /// Auctions whose closed state was persisted during the pass
    pub closed_count: usize,
}

/// Auction closing service
///
/// Closes every open auction that started at least `threshold_days` calendar
/// days ago, persists it and sends a closing notice.
pub struct AuctionCloser {
    repository: Arc<dyn AuctionRepository>,
    notifier: Arc<dyn Notifier>,
    time_provider: Arc<dyn TimeProvider>,
    policy: ClosingPolicy,
}

impl AuctionCloser {
    /// Create a new closer
    ///
    /// # Arguments
    /// * `repository` - Source of current auctions, sink for updates
    /// * `notifier` - Closing notice transport
    /// * `time_provider` - Time provider
    /// * `policy` - Eligibility rule (default: one week)
    ///
    /// # Example
    /// ```ignore
    /// let closer = AuctionCloser::new(
    ///     repository,
    ///     notifier,
    ///     time_provider,
    ///     ClosingPolicy::default(),
    /// );
    /// let result = closer.run().await?;
    /// ```
    pub fn new(
        repository: Arc<dyn AuctionRepository>,
        notifier: Arc<dyn Notifier>,
        time_provider: Arc<dyn TimeProvider>,
        policy: ClosingPolicy,
    ) -> Self {
        Self {
            repository,
            notifier,
            time_provider,
            policy,
        }
    }

    pub fn policy(&self) -> ClosingPolicy {
        self.policy
    }

    /// Run one closing pass
    ///
    /// Algorithm:
    /// 1. Fetch current auctions (failure here aborts the pass)
    /// 2. For each auction, in repository order, skip unless eligible
    /// 3. Close it in memory and persist it
    ///    - persist failed: no notice, not counted, move on
    /// 4. Send the closing notice
    ///    - notice failed: still counted, move on
    ///
    /// # Returns
    /// Number of auctions whose closed state was persisted
    pub async fn run(&self) -> Result<ClosingResult> {
        let now = self.time_provider.now();
        let auctions = self.repository.list_current().await?;

        info!(
            now = %now,
            threshold_days = self.policy.threshold_days(),
            candidates = auctions.len(),
            "Starting auction closing pass"
        );

        let mut closed_count = 0;

        for mut auction in auctions {
            if !self.policy.is_eligible(&auction, now) {
                debug!(
                    auction_id = %auction.id,
                    age_in_days = auction.age_in_days(now),
                    closed = auction.closed,
                    "Auction not eligible for closing"
                );
                continue;
            }

            if self.close_single_auction(&mut auction).await {
                closed_count += 1;
            }
        }

        info!(closed_count = closed_count, "Auction closing pass complete");
        Ok(ClosingResult { closed_count })
    }

    /// Close, persist and notify a single auction
    ///
    /// Returns `true` once the closed state is persisted, whatever happens to
    /// the notice afterwards.
    async fn close_single_auction(&self, auction: &mut Auction) -> bool {
        auction.close();

        if let Err(e) = self.repository.persist_update(auction).await {
            warn!(
                auction_id = %auction.id,
                error = %e,
                "Failed to persist closed auction, skipping notice"
            );
            return false;
        }

        match self.notifier.send_closing_notice(auction).await {
            Ok(()) => info!(auction_id = %auction.id, "Auction closed and notice sent"),
            Err(e) => warn!(
                auction_id = %auction.id,
                error = %e,
                "Auction closed but closing notice failed"
            ),
        }

        true
    }
}
