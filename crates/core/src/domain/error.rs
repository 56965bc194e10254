// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid closing threshold: {0} days (must be at least 1)")]
    InvalidThreshold(i64),
}

pub type Result<T> = std::result::Result<T, DomainError>;
