// Notifier Port (closing notices)

use crate::domain::Auction;
use async_trait::async_trait;
use thiserror::Error;

/// Notice delivery errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Notice rejected: {0}")]
    Rejected(String),
}

/// Notifier trait
///
/// Tells an interested party that an auction was closed. The closer does not
/// retry and does not consume any return value beyond success/failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_closing_notice(&self, auction: &Auction) -> Result<(), NotificationError>;
}
