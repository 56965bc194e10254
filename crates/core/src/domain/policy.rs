// Closing Policy (eligibility rule)

use super::auction::Auction;
use super::error::{DomainError, Result};
use chrono::{DateTime, Utc};

/// Auctions this many calendar days old (or older) are closed
pub const DEFAULT_CLOSING_THRESHOLD_DAYS: i64 = 7;

/// Decides which auctions a closing pass should close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingPolicy {
    threshold_days: i64,
}

impl ClosingPolicy {
    /// Create a policy with a custom threshold
    ///
    /// # Errors
    /// `DomainError::InvalidThreshold` if `threshold_days < 1`
    pub fn new(threshold_days: i64) -> Result<Self> {
        if threshold_days < 1 {
            return Err(DomainError::InvalidThreshold(threshold_days));
        }
        Ok(Self { threshold_days })
    }

    pub fn threshold_days(&self) -> i64 {
        self.threshold_days
    }

    /// Open and at least `threshold_days` calendar days old (inclusive)
    pub fn is_eligible(&self, auction: &Auction, now: DateTime<Utc>) -> bool {
        !auction.is_closed() && auction.age_in_days(now) >= self.threshold_days
    }
}

impl Default for ClosingPolicy {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_CLOSING_THRESHOLD_DAYS,
        }
    }
}
