// Port Layer - Interfaces for external dependencies

pub mod auction_repository;
pub mod notifier;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use auction_repository::{AuctionRepository, RepositoryError};
pub use notifier::{NotificationError, Notifier};
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
