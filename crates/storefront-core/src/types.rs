//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │   CartState     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │──►│  items[]        │       │
//! │  │  name           │   │  name           │   │  total_items    │       │
//! │  │  description    │   │  price          │   │  total_price    │       │
//! │  │  price          │   │  quantity       │   └─────────────────┘       │
//! │  │  features[]     │   │  sub_total      │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  Product is read-only catalog data. A CartItem keeps only what the     │
//! │  cart needs: description and features are dropped.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record as served by the Product Source.
///
/// The price travels as decimal dollars on the wire (`"price": 10.99`)
/// and is held as [`Money`] from deserialization on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, e.g. `"A49iEB"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Long description for the details page.
    #[serde(default)]
    pub description: String,

    /// Unit price.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub price: Money,

    /// Feature bullet points, in display order.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Creates a product with no description or features.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            features: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the feature list.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Invariant
/// `sub_total == price * quantity` and `quantity >= 1` after every
/// transition. Lines are identified by `id`.
///
/// Amounts go on the wire as decimal dollars, like [`Product::price`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product ID (unique within the cart).
    pub id: String,

    /// Product name at time of adding.
    pub name: String,

    /// Unit price at time of adding.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub price: Money,

    /// Quantity in cart.
    pub quantity: i64,

    /// Line total (price × quantity).
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub sub_total: Money,
}

impl CartItem {
    /// Creates a single-unit line from a product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            sub_total: product.price,
        }
    }

    /// Returns a copy with a new quantity and recomputed subtotal.
    ///
    /// `None` when the subtotal does not fit in [`Money`].
    pub fn with_quantity(&self, quantity: i64) -> Option<Self> {
        Some(CartItem {
            quantity,
            sub_total: self.price.checked_mul_quantity(quantity)?,
            ..self.clone()
        })
    }
}

/// Sums quantities and subtotals over `items`, `None` on overflow.
pub(crate) fn line_totals(items: &[CartItem]) -> Option<(i64, Money)> {
    items
        .iter()
        .try_fold((0_i64, Money::zero()), |(quantity, price), item| {
            Some((
                quantity.checked_add(item.quantity)?,
                price.checked_add(item.sub_total)?,
            ))
        })
}

// =============================================================================
// Cart State
// =============================================================================

/// The full cart: lines in insertion order plus running totals.
///
/// ## Invariants
/// - `total_items == Σ item.quantity`
/// - `total_price == Σ item.sub_total`
/// - No two items share an `id`
/// - No item has `quantity <= 0`
///
/// `CartState::default()` is the canonical empty cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    /// Lines in the order they were first added.
    pub items: Vec<CartItem>,

    /// Total units across all lines.
    pub total_items: i64,

    /// Sum of all line subtotals.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub total_price: Money,
}

impl CartState {
    /// The canonical empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the line for `id`, if present.
    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks whether a product is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    /// Quantity of a product in the cart (0 if absent).
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.item(id).map_or(0, |item| item.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks every cart invariant against the stored totals.
    pub fn is_consistent(&self) -> bool {
        let totals_ok = line_totals(&self.items) == Some((self.total_items, self.total_price));

        let lines_ok = self.items.iter().all(|item| {
            item.quantity >= 1 && item.price.checked_mul_quantity(item.quantity) == Some(item.sub_total)
        });

        let ids_unique = self
            .items
            .iter()
            .enumerate()
            .all(|(i, item)| self.items[..i].iter().all(|other| other.id != item.id));

        lines_ok && ids_unique && totals_ok
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(800).to_string(), "8%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert!((TaxRate::from_bps(800).percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "id": "A49iEB",
            "name": "Premium Headphones",
            "description": "High-quality wireless headphones with noise cancellation",
            "price": 299,
            "features": ["Active Noise Cancellation", "30-hour battery life"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "A49iEB");
        assert_eq!(product.price, Money::from_dollars(299));
        assert_eq!(product.features.len(), 2);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], serde_json::json!(299.0));
    }

    #[test]
    fn test_product_optional_fields_default() {
        let product: Product =
            serde_json::from_str(r#"{"id": "1", "name": "Test Product", "price": 10.99}"#).unwrap();
        assert_eq!(product.price.cents(), 1099);
        assert!(product.description.is_empty());
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_cart_item_from_product_drops_details() {
        let product = Product::new("1", "Test Product", Money::from_cents(1099))
            .with_description("A test product")
            .with_features(["test-feature"]);

        let item = CartItem::from_product(&product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.sub_total, Money::from_cents(1099));

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["subTotal"], serde_json::json!(10.99));
    }

    #[test]
    fn test_cart_amounts_share_product_price_unit() {
        let product = Product::new("1", "Test Product", Money::from_cents(1099));
        let item = CartItem::from_product(&product).with_quantity(2).unwrap();
        let state = CartState {
            items: vec![item],
            total_items: 2,
            total_price: Money::from_cents(2198),
        };

        let product_json = serde_json::to_value(&product).unwrap();
        let state_json = serde_json::to_value(&state).unwrap();
        assert_eq!(state_json["items"][0]["price"], product_json["price"]);
        assert_eq!(state_json["items"][0]["subTotal"], serde_json::json!(21.98));
        assert_eq!(state_json["totalPrice"], serde_json::json!(21.98));

        let decoded: CartState = serde_json::from_value(state_json).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_cart_state_lookups() {
        let item = CartItem::from_product(&Product::new("2", "Widget", Money::from_cents(1550)))
            .with_quantity(3)
            .unwrap();
        let state = CartState {
            items: vec![item],
            total_items: 3,
            total_price: Money::from_cents(4650),
        };

        assert!(state.contains("2"));
        assert!(!state.contains("1"));
        assert_eq!(state.quantity_of("2"), 3);
        assert_eq!(state.quantity_of("1"), 0);
        assert_eq!(state.len(), 1);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_inconsistent_state_detected() {
        let item = CartItem::from_product(&Product::new("1", "A", Money::from_cents(100)));
        let state = CartState {
            items: vec![item.clone(), item],
            total_items: 2,
            total_price: Money::from_cents(200),
        };
        assert!(!state.is_consistent());

        let huge = CartItem::from_product(&Product::new("2", "B", Money::from_cents(i64::MAX)));
        let overflowing = CartState {
            items: vec![huge.clone(), CartItem { id: "3".into(), ..huge }],
            total_items: 2,
            total_price: Money::from_cents(i64::MAX),
        };
        assert!(!overflowing.is_consistent());

        let empty = CartState::empty();
        assert!(empty.is_consistent());
        assert!(empty.is_empty());
    }
}
