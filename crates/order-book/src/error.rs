//! Error types for the order book core

use thiserror::Error;

/// Errors raised at the command boundary
///
/// Both kinds are raised before any mutation: a rejected submit consumes no
/// id and leaves no trace, a rejected cancel does not alter the book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed command or lifecycle violation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The order id is unknown to the registry
    #[error("Order not found: {0}")]
    NotFound(u64),
}

/// Result type alias for book commands and queries
pub type BookResult<T> = std::result::Result<T, BookError>;

impl BookError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(order_id: u64) -> Self {
        Self::NotFound(order_id)
    }
}
