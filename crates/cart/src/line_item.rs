use catalog::Product;
use common::Money;

/// A cart entry resolved against catalog data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// The resolved product.
    pub product: Product,

    /// Quantity in the cart.
    pub qty: u32,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(product: Product, qty: u32) -> Self {
        Self { product, qty }
    }

    /// Returns the line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply(self.qty)
    }
}

/// Sums the subtotals of resolved line items.
pub fn subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: u64, qty: u32) -> LineItem {
        LineItem::new(
            Product::new(1, "Red Mug", Money::from_minor(price), "ceramic"),
            qty,
        )
    }

    #[test]
    fn line_subtotal_multiplies_price_by_qty() {
        assert_eq!(item(150, 3).subtotal(), Money::from_minor(450));
    }

    #[test]
    fn subtotal_sums_all_lines() {
        let items = vec![item(150, 2), item(300, 1)];
        assert_eq!(subtotal(&items), Money::from_minor(600));
    }

    #[test]
    fn subtotal_of_no_items_is_zero() {
        assert_eq!(subtotal(&[]), Money::zero());
    }
}
