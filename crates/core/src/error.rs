//! Store error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the store layers.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is recoverable: it ends the current operation and leaves the
/// catalog untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A requested quantity was zero or negative.
    #[error("quantity must be a positive integer (got {0})")]
    InvalidQuantity(i64),

    /// The referenced product is not in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// A purchase asked for more units than are on hand.
    #[error("insufficient stock: requested {requested}, only {available} available")]
    InsufficientStock { requested: u64, available: u64 },

    /// A restock would push the quantity past the representable maximum.
    #[error("stock for product {0} cannot grow any further")]
    StockOverflow(ProductId),

    /// An identifier was invalid (e.g. parse failure, zero).
    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// A record or seed failed validation.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }
}
