//! Immutable order records.

use cart::LineItem;
use chrono::{DateTime, NaiveDateTime, Utc};
use common::{Money, OrderId, ProductId};
use serde::{Deserialize, Deserializer, Serialize};

/// Customer details captured at checkout.
///
/// All fields are surrounding-whitespace-trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub comments: String,
}

impl CustomerInfo {
    /// Creates customer info, trimming surrounding whitespace from every
    /// field.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        address: &str,
        comments: &str,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            comments: comments.trim().to_string(),
        }
    }
}

/// A line of an order: a frozen copy of product data at order time.
///
/// Independent of the catalog from creation on; later price or title
/// changes never reach it.
///
/// Histories written by earlier storefront versions keyed these fields
/// `id`/`price`/`qty`; the aliases keep such histories readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(alias = "id")]
    pub product_id: ProductId,
    pub title: String,
    #[serde(alias = "price")]
    pub unit_price: Money,
    #[serde(alias = "qty")]
    pub quantity: u32,
    pub subtotal: Money,
}

impl OrderLineItem {
    /// Freezes a resolved cart line item into an order line.
    pub fn freeze(item: &LineItem) -> Self {
        Self {
            product_id: item.product.id,
            title: item.product.title.clone(),
            unit_price: item.product.price,
            quantity: item.qty,
            subtotal: item.subtotal(),
        }
    }
}

/// An immutable, timestamped snapshot of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Time-derived id, unique and strictly increasing within a ledger.
    pub id: OrderId,

    /// Creation timestamp.
    ///
    /// Serialized as RFC 3339; earlier storefront versions persisted a
    /// ru-RU locale string instead, which still deserializes.
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,

    /// Customer details as submitted (trimmed).
    pub customer: CustomerInfo,

    /// Frozen line items, in cart order.
    pub items: Vec<OrderLineItem>,

    /// Sum of all line subtotals.
    pub total: Money,
}

// Accepts RFC 3339 (what this engine writes) and the "31.12.2023, 12:00:00"
// locale format earlier storefront versions wrote, read as UTC.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%d.%m.%Y, %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use catalog::Product;

    use super::*;

    #[test]
    fn customer_info_trims_every_field() {
        let customer = CustomerInfo::new(
            "  Anna ",
            "Koval\n",
            " anna@example.com ",
            "\t+380501234567",
            "  1 Main St  ",
            "  ring twice  ",
        );
        assert_eq!(customer.first_name, "Anna");
        assert_eq!(customer.last_name, "Koval");
        assert_eq!(customer.email, "anna@example.com");
        assert_eq!(customer.phone, "+380501234567");
        assert_eq!(customer.address, "1 Main St");
        assert_eq!(customer.comments, "ring twice");
    }

    #[test]
    fn freeze_copies_product_data_and_computes_subtotal() {
        let item = LineItem::new(
            Product::new(2, "Blue Mug", Money::from_minor(300), "ceramic"),
            2,
        );
        let frozen = OrderLineItem::freeze(&item);
        assert_eq!(frozen.product_id, ProductId::new(2));
        assert_eq!(frozen.title, "Blue Mug");
        assert_eq!(frozen.unit_price, Money::from_minor(300));
        assert_eq!(frozen.quantity, 2);
        assert_eq!(frozen.subtotal, Money::from_minor(600));
    }

    #[test]
    fn legacy_line_item_field_names_still_deserialize() {
        let legacy = serde_json::json!({
            "id": 1,
            "title": "Red Mug",
            "price": 150,
            "qty": 2,
            "subtotal": 300
        });
        let item: OrderLineItem = serde_json::from_value(legacy).unwrap();
        assert_eq!(item.product_id, ProductId::new(1));
        assert_eq!(item.unit_price, Money::from_minor(150));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.subtotal, Money::from_minor(300));
    }

    #[test]
    fn created_at_accepts_rfc3339_and_legacy_locale_strings() {
        let rfc = serde_json::json!({
            "id": 1, "createdAt": "2023-12-31T12:00:00Z",
            "customer": CustomerInfo::new("A", "B", "a@b.c", "1", "addr", ""),
            "items": [], "total": 0
        });
        let order: Order = serde_json::from_value(rfc).unwrap();
        assert_eq!(order.created_at.to_rfc3339(), "2023-12-31T12:00:00+00:00");

        let legacy = serde_json::json!({
            "id": 1, "createdAt": "31.12.2023, 12:00:00",
            "customer": CustomerInfo::new("A", "B", "a@b.c", "1", "addr", ""),
            "items": [], "total": 0
        });
        let order: Order = serde_json::from_value(legacy).unwrap();
        assert_eq!(order.created_at.to_rfc3339(), "2023-12-31T12:00:00+00:00");
    }

    #[test]
    fn order_serializes_with_camel_case_field_names() {
        let order = Order {
            id: OrderId::new(1_700_000_000_000),
            created_at: Utc::now(),
            customer: CustomerInfo::new("A", "B", "a@b.c", "1", "addr", ""),
            items: vec![OrderLineItem {
                product_id: ProductId::new(1),
                title: "Red Mug".to_string(),
                unit_price: Money::from_minor(150),
                quantity: 3,
                subtotal: Money::from_minor(450),
            }],
            total: Money::from_minor(450),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json["customer"].get("firstName").is_some());
        assert!(json["items"][0].get("productId").is_some());
        assert!(json["items"][0].get("unitPrice").is_some());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
