//! Append-only order ledger and checkout orchestration.
//!
//! [`OrderLedger`] snapshots resolved cart contents into immutable
//! [`Order`] records and appends them to a persisted history. Once
//! appended, an order never changes; later catalog or cart mutations
//! cannot touch it. [`checkout::place_order`] ties the cart, catalog, and
//! ledger together into the one cross-store operation.

pub mod checkout;
pub mod error;
pub mod order;
pub mod store;

pub use checkout::place_order;
pub use error::{CheckoutError, LedgerError, Result};
pub use order::{CustomerInfo, Order, OrderLineItem};
pub use store::{ORDERS_KEY, OrderLedger};
