use std::collections::HashMap;

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Immutable and externally supplied; the engine never edits product data,
/// it only copies it (into cart line items and frozen order items).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,

    /// Display title, also the target of text search.
    pub title: String,

    /// Unit price in minor currency units.
    pub price: Money,

    /// Long-form description.
    pub description: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: description.into(),
        }
    }
}

/// The read-only product catalog.
///
/// Holds products in their supplied order (the `default` sort order) with
/// an id index for lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Creates a catalog from an ordered product list.
    ///
    /// If the list repeats an id, the first occurrence wins the lookup.
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            by_id.entry(product.id).or_insert(idx);
        }
        Self { products, by_id }
    }

    /// Looks up a product by id.
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    /// Returns all products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
