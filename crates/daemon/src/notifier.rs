// Log-only Notifier adapter

use async_trait::async_trait;
use auction_closer_core::domain::Auction;
use auction_closer_core::port::{NotificationError, Notifier};
use tracing::info;

/// Writes each closing notice as a structured log event
///
/// Default transport until a mail or queue adapter is wired in.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_closing_notice(&self, auction: &Auction) -> Result<(), NotificationError> {
        info!(
            target: "auction_closer::notice",
            auction_id = %auction.id,
            description = %auction.description,
            started_at = %auction.started_at,
            "Auction closed"
        );
        Ok(())
    }
}
