// Auction Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Auction ID (opaque to the core)
pub type AuctionId = String;

/// Auction Entity
///
/// Owned by the repository. The closer only flips `closed` during a pass and
/// asks the repository to persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    pub description: String,
    pub started_at: DateTime<Utc>,
    pub closed: bool,
}

impl Auction {
    /// Create a new open auction
    ///
    /// # Arguments
    ///
    /// * `id` - Unique auction ID (injected, not generated)
    /// * `description` - Free-form description
    /// * `started_at` - When bidding opened
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            started_at,
            closed: false,
        }
    }

    /// Whole UTC calendar days between the start date and `now`.
    ///
    /// Negative when the auction starts in the future.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now.date_naive() - self.started_at.date_naive()).num_days()
    }

    /// Mark the auction as closed
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
