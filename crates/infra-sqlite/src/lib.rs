// Auction Closer Infrastructure - SQLite Adapter
// Implements: AuctionRepository

mod auction_repository;
mod connection;
mod error;
mod migration;

pub use auction_repository::SqliteAuctionRepository;
pub use connection::create_pool;
pub use migration::run_migrations;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for RepositoryError here)
