//! # Checkout Summary
//!
//! The numbers the cart page shows under the item list. They are derived
//! from a [`CartState`] on demand and never stored in it.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Subtotal (4 items):                 $48.47  │
//! │  Shipping:                             Free  │
//! │  Tax (8%):                            $3.88  │
//! │  ──────────────────────────────────────────  │
//! │  Total:                              $52.35  │
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartState, TaxRate};

/// The single sales tax rate applied at checkout (8%).
pub const STANDARD_TAX_RATE: TaxRate = TaxRate::from_bps(800);

/// Checkout totals for a cart snapshot.
///
/// Amounts serialize as decimal dollars, matching the cart they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    /// Units in the cart (the "N items" on the subtotal line).
    pub item_count: i64,

    /// Cart total before tax.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub subtotal: Money,

    /// Shipping charge. Always free.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub shipping: Money,

    /// Rate used for `tax`.
    pub tax_rate: TaxRate,

    /// Tax on the subtotal, rounded half up to the cent.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub tax: Money,

    /// Grand total (subtotal + shipping + tax), capped at the largest amount.
    #[serde(with = "crate::money::dollars")]
    #[ts(type = "number")]
    pub total: Money,
}

impl CheckoutSummary {
    /// Computes the summary at the standard tax rate.
    ///
    /// ```rust
    /// use storefront_core::{CartState, CheckoutSummary, Money};
    ///
    /// let summary = CheckoutSummary::for_cart(&CartState::empty());
    /// assert_eq!(summary.total, Money::zero());
    /// ```
    pub fn for_cart(cart: &CartState) -> Self {
        let subtotal = cart.total_price;
        let shipping = Money::zero();
        let tax = subtotal.calculate_tax(STANDARD_TAX_RATE);

        CheckoutSummary {
            item_count: cart.total_items,
            subtotal,
            shipping,
            tax_rate: STANDARD_TAX_RATE,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
        }
    }

    /// Checks if shipping costs nothing (the "Free" label).
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

impl From<&CartState> for CheckoutSummary {
    fn from(cart: &CartState) -> Self {
        CheckoutSummary::for_cart(cart)
    }
}
