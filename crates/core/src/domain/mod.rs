// Domain Layer - Pure business logic and entities

pub mod auction;
pub mod error;
pub mod policy;

// Re-exports
pub use auction::{Auction, AuctionId};
pub use error::DomainError;
pub use policy::{ClosingPolicy, DEFAULT_CLOSING_THRESHOLD_DAYS};
