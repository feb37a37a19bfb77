use std::collections::BTreeMap;

use catalog::Catalog;
use common::ProductId;
use storage::{Storage, parse_or_default};

use crate::{LineItem, Result};

/// Default storage key for the cart quantity map.
pub const CART_KEY: &str = "my_shop_cart_v1";

/// The shopping cart store.
///
/// Owns the live quantity map for the session and writes the full map
/// through to storage after every mutation, so a reload (or a second
/// reader of the same storage) observes the latest state once the call
/// returns. Quantities are strictly positive; a decrement to zero removes
/// the key.
pub struct CartStore<S: Storage> {
    storage: S,
    key: String,
    items: BTreeMap<ProductId, u32>,
}

impl<S: Storage> CartStore<S> {
    /// Opens the cart under the default storage key, loading any persisted
    /// state.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, CART_KEY)
    }

    /// Opens the cart under a custom storage key.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            items: BTreeMap::new(),
        };
        store.load();
        store
    }

    /// Re-reads the persisted map, replacing the in-memory state.
    ///
    /// Missing, unreadable, or corrupt persisted data recovers to the
    /// empty map; this never fails. Entries that violate the
    /// positive-quantity invariant are dropped on the way in.
    pub fn load(&mut self) -> &BTreeMap<ProductId, u32> {
        let raw = self.storage.get(&self.key).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "cart read failed, starting empty");
            None
        });
        self.items = parse_or_default::<BTreeMap<ProductId, u32>>(raw.as_deref());
        self.items.retain(|_, qty| *qty > 0);
        &self.items
    }

    /// Increments the quantity for `id` by one, creating the entry at one
    /// if absent, then persists.
    ///
    /// No catalog-membership check happens here; validating that the id
    /// exists belongs to the caller.
    #[tracing::instrument(skip(self))]
    pub fn add(&mut self, id: ProductId) -> Result<()> {
        *self.items.entry(id).or_insert(0) += 1;
        self.save()?;
        metrics::counter!("cart_items_added").increment(1);
        Ok(())
    }

    /// Decrements the quantity for `id` by one, removing the entry when it
    /// reaches zero, then persists. A no-op for ids not in the cart.
    #[tracing::instrument(skip(self))]
    pub fn remove_one(&mut self, id: ProductId) -> Result<()> {
        let Some(qty) = self.items.get_mut(&id) else {
            return Ok(());
        };
        if *qty > 1 {
            *qty -= 1;
        } else {
            self.items.remove(&id);
        }
        self.save()?;
        metrics::counter!("cart_items_removed").increment(1);
        Ok(())
    }

    /// Empties the cart and persists the empty map.
    #[tracing::instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.save()
    }

    /// Returns the sum of all quantities.
    pub fn total_count(&self) -> u32 {
        self.items.values().sum()
    }

    /// Returns true if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the live quantity map.
    pub fn entries(&self) -> &BTreeMap<ProductId, u32> {
        &self.items
    }

    /// Resolves cart entries against the catalog into line items.
    ///
    /// Entries whose product no longer exists are skipped rather than
    /// raised; they never reach totals or display.
    pub fn line_items(&self, catalog: &Catalog) -> Vec<LineItem> {
        self.items
            .iter()
            .filter_map(|(&id, &qty)| match catalog.lookup(id) {
                Some(product) => Some(LineItem::new(product.clone(), qty)),
                None => {
                    tracing::warn!(product_id = %id, "skipping cart entry for unknown product");
                    None
                }
            })
            .collect()
    }

    // Full-map write-through; called by every mutation before it returns.
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }
}
