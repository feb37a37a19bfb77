//! Ledger and checkout error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An order must contain at least one line item.
    #[error("Cannot create an order with no items")]
    EmptyOrder,

    /// The write to storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// The order history could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur while placing an order at checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with an empty cart; a user-facing validation
    /// failure, reported before any order is created.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart entry references a product the catalog no longer has.
    #[error("Product {0} is no longer available")]
    MissingProduct(ProductId),

    /// A ledger operation failed.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Clearing the cart after the order was appended failed. The order is
    /// in the ledger; the cart still holds its items.
    #[error("Cart error: {0}")]
    Cart(#[from] cart::CartError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
