// Application Layer - Use Cases

pub mod closer;
pub mod scheduler;

// Re-exports
pub use closer::{AuctionCloser, ClosingResult};
pub use scheduler::ClosingScheduler;
