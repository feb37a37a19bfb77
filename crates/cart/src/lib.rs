//! Persistent shopping cart store.
//!
//! The cart is a quantity map keyed by product id, owned by a
//! [`CartStore`] that writes through to storage after every mutation.
//! Derived queries (total count, resolved line items, subtotal) never
//! mutate state.

pub mod error;
pub mod line_item;
pub mod store;

pub use error::{CartError, Result};
pub use line_item::{LineItem, subtotal};
pub use store::{CART_KEY, CartStore};
