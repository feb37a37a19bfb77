use std::sync::Mutex;

use cart::LineItem;
use chrono::Utc;
use common::{Money, OrderId};
use storage::{Storage, parse_or_default};

use crate::{CustomerInfo, LedgerError, Order, OrderLineItem, Result};

/// Default storage key for the order history.
pub const ORDERS_KEY: &str = "my_shop_orders_v1";

/// The append-only order ledger.
///
/// The persisted history is a JSON array of orders in creation order.
/// Appending reads the current history, pushes, and writes the whole
/// array back; no update or delete is exposed.
pub struct OrderLedger<S: Storage> {
    storage: S,
    key: String,
    // Last issued order id; ids derive from the clock but must never
    // collide, even for orders created within the same millisecond.
    last_issued: Mutex<i64>,
}

impl<S: Storage> OrderLedger<S> {
    /// Opens the ledger under the default storage key.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, ORDERS_KEY)
    }

    /// Opens the ledger under a custom storage key.
    ///
    /// Seeds the id counter from the persisted history, so ids stay unique
    /// across reloads of the same ledger.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let ledger = Self {
            storage,
            key: key.into(),
            last_issued: Mutex::new(0),
        };
        let max_persisted = ledger
            .list_orders()
            .iter()
            .map(|o| o.id.as_i64())
            .max()
            .unwrap_or(0);
        *ledger.lock_last_issued() = max_persisted;
        ledger
    }

    /// Reads the full persisted history in creation order.
    ///
    /// Missing, unreadable, corrupt, or non-array data recovers to the
    /// empty history; this never fails.
    pub fn list_orders(&self) -> Vec<Order> {
        let raw = self.storage.get(&self.key).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "order history read failed, treating as empty");
            None
        });
        parse_or_default(raw.as_deref())
    }

    /// Reads the history most-recent first, for display.
    ///
    /// Ids are unique and strictly increasing, so descending id order is
    /// exactly reverse-chronological.
    pub fn list_orders_recent_first(&self) -> Vec<Order> {
        let mut orders = self.list_orders();
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        orders
    }

    /// Builds an immutable order from resolved line items and customer
    /// input.
    ///
    /// Line items must be non-empty; each is frozen (title and unit price
    /// copied) so later catalog changes cannot alter the order. The total
    /// is the sum of the frozen line subtotals, which equals the cart
    /// subtotal for the same items. The order is not yet persisted; follow
    /// with [`append_order`](Self::append_order).
    #[tracing::instrument(skip(self, items, customer), fields(item_count = items.len()))]
    pub fn create_order(&self, items: &[LineItem], customer: CustomerInfo) -> Result<Order> {
        if items.is_empty() {
            return Err(LedgerError::EmptyOrder);
        }

        let frozen: Vec<OrderLineItem> = items.iter().map(OrderLineItem::freeze).collect();
        let total: Money = frozen.iter().map(|i| i.subtotal).sum();
        let order = Order {
            id: self.next_id(),
            created_at: Utc::now(),
            customer,
            items: frozen,
            total,
        };
        tracing::info!(order_id = %order.id, total = %order.total, "order created");
        Ok(order)
    }

    /// Appends an order to the persisted history.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn append_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.list_orders();
        orders.push(order.clone());
        let json = serde_json::to_string(&orders)?;
        self.storage.set(&self.key, &json)?;
        metrics::counter!("ledger_orders_appended").increment(1);
        Ok(())
    }

    // Time-derived id, bumped past the last issued one on collision so two
    // orders created in the same millisecond still get distinct ids.
    fn next_id(&self) -> OrderId {
        let mut last = self.lock_last_issued();
        let candidate = Utc::now().timestamp_millis().max(*last + 1);
        *last = candidate;
        OrderId::new(candidate)
    }

    fn lock_last_issued(&self) -> std::sync::MutexGuard<'_, i64> {
        self.last_issued.lock().unwrap_or_else(|e| e.into_inner())
    }
}
