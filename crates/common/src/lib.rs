//! Shared value types for the storefront state engine.
//!
//! Newtype wrappers keep the id spaces apart (a product id is not an order
//! id) and keep money arithmetic in integer minor units.

pub mod ids;
pub mod money;

pub use ids::{OrderId, ProductId};
pub use money::Money;
