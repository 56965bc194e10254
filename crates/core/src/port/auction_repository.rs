// Auction Repository Port (Interface)

use crate::domain::Auction;
use async_trait::async_trait;
use thiserror::Error;

/// Persistence errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    #[error("Auction not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Repository interface for Auction persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// All auctions not yet closed, in the order they should be evaluated
    ///
    /// An empty vector means there is nothing to do.
    async fn list_current(&self) -> Result<Vec<Auction>, RepositoryError>;

    /// Durably record the auction's current state (its `closed` flag)
    async fn persist_update(&self, auction: &Auction) -> Result<(), RepositoryError>;
}
