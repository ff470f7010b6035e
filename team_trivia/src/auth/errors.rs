//! Access gate error types.

use thiserror::Error;

/// Access gate configuration errors
#[derive(Debug, Error, Eq, PartialEq)]
pub enum AccessError {
    /// The configured digest isn't hex
    #[error("Access hash is not valid hex: {0}")]
    InvalidHex(String),

    /// The configured digest isn't a SHA-256 digest
    #[error("Access hash must be 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Result type for access gate operations
pub type AccessResult<T> = Result<T, AccessError>;
