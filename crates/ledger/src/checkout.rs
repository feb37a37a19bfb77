//! Checkout orchestration across cart, catalog, and ledger.

use cart::{CartStore, LineItem};
use catalog::Catalog;
use storage::Storage;

use crate::{CheckoutError, CustomerInfo, Order, OrderLedger};

/// Places an order from the current cart contents.
///
/// Rejects an empty cart before anything is created, then resolves every
/// cart entry against the catalog — an unresolvable entry fails the whole
/// checkout rather than silently charging for fewer items than the cart
/// holds. On success the order has been appended to the ledger and the
/// cart cleared.
///
/// A failure after the append (the cart clear) is surfaced as
/// [`CheckoutError::Cart`]; the order is already in the ledger and the
/// cart keeps its items, so the caller can retry the clear or tell the
/// user.
#[tracing::instrument(skip_all, fields(cart_count = cart.total_count()))]
pub fn place_order<C: Storage, L: Storage>(
    cart: &mut CartStore<C>,
    ledger: &OrderLedger<L>,
    catalog: &Catalog,
    customer: CustomerInfo,
) -> std::result::Result<Order, CheckoutError> {
    if cart.total_count() == 0 {
        return Err(CheckoutError::EmptyCart);
    }

    let mut items = Vec::with_capacity(cart.entries().len());
    for (&id, &qty) in cart.entries() {
        let product = catalog
            .lookup(id)
            .ok_or(CheckoutError::MissingProduct(id))?;
        items.push(LineItem::new(product.clone(), qty));
    }

    let order = ledger.create_order(&items, customer)?;
    ledger.append_order(&order)?;
    cart.clear()?;

    tracing::info!(order_id = %order.id, total = %order.total, "checkout complete");
    Ok(order)
}
