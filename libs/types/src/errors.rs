//! Error types shared between the engine and its transport
//!
//! Validation failures are a boundary concern: an order that fails these
//! checks never reaches the matching core.

use thiserror::Error;

/// Rejections raised while validating an inbound order request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderValidationError {
    #[error("symbol must be non-empty")]
    EmptySymbol,

    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(String),

    #[error("price is required for {0} orders")]
    MissingPrice(String),

    #[error("price must be non-negative, got {0}")]
    NegativePrice(String),
}
