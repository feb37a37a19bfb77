//! Read-only product catalog and the filter/sort engine.
//!
//! The catalog is supplied once at startup and never mutated; the engine in
//! [`filter`] is a pure function over it. Cart and ledger resolve product
//! ids against [`Catalog::lookup`].

pub mod filter;
pub mod product;

pub use filter::{FilterCriteria, SortKey, apply};
pub use product::{Catalog, Product};
