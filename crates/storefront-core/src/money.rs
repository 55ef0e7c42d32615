//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing cart lines in floating point:                                  │
//! │    10.99 * 3 + 15.50 = 48.480000000000004  ❌ WRONG!                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1099 * 3 + 1550 = 4847 cents = $48.47   ✅                           │
//! │                                                                         │
//! │  Adding to a cart accumulates totals incrementally, updating a         │
//! │  quantity re-derives them. With cents both paths agree exactly.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let tripled = price.checked_mul_quantity(3).unwrap(); // $32.97
//! let total = tripled + Money::from_cents(1550);         // $48.47
//! assert_eq!(total.to_string(), "$48.47");
//! ```
//!
//! The cart engine only uses the `checked_*` methods, so a quantity or
//! total that does not fit in an `i64` is reported as `None` instead of
//! wrapping or panicking.
//!
//! ## The Catalog Wire Format
//! The Product Source sends prices as decimal dollars (`10.99`, `299`).
//! The [`dollars`] serde adapter converts them to cents exactly once, at
//! the deserialization boundary. Nothing past that boundary sees a float.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

/// Largest dollar amount accepted from the wire. Keeps `value * 100`
/// well inside the exactly-representable f64 integer range.
const MAX_WIRE_DOLLARS: f64 = 1.0e13;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.price ──► CartItem.sub_total
///                                            │
///                                            ▼
///                   CartState.total_price ──► CheckoutSummary (tax, total)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(299).cents(), 29900);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Converts a decimal dollar amount to cents, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and amounts too large to convert
    /// exactly. Only the catalog wire boundary should call this.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_dollars(10.99), Some(Money::from_cents(1099)));
    /// assert_eq!(Money::from_decimal_dollars(15.5), Some(Money::from_cents(1550)));
    /// assert_eq!(Money::from_decimal_dollars(f64::NAN), None);
    /// ```
    pub fn from_decimal_dollars(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_WIRE_DOLLARS {
            return None;
        }
        Some(Money((value * 100.0).round() as i64))
    }

    /// Returns the value as decimal dollars (wire format and display only).
    #[inline]
    pub fn to_decimal_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(4847); // $48.47
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// // $48.47 × 8% = $3.8776 → $3.88
    /// assert_eq!(tax.cents(), 388);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large carts from overflowing before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies a unit price by a quantity, `None` on overflow.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1099);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(3297)));
    /// assert_eq!(unit_price.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, clamping at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.99` / `-$5.50`.
///
/// ## Note
/// Matches the `toFixed(2)` rendering the cart page uses.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Decimal Dollar Wire Format
// =============================================================================

/// Serde adapter for fields carried as decimal dollars on the wire.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use storefront_core::money::{self, Money};
///
/// #[derive(Serialize, Deserialize)]
/// struct Line {
///     #[serde(with = "money::dollars")]
///     price: Money,
/// }
///
/// let line: Line = serde_json::from_str(r#"{"price": 10.99}"#).unwrap();
/// assert_eq!(line.price.cents(), 1099);
/// assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"price":10.99}"#);
/// ```
pub mod dollars {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_decimal_dollars())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal_dollars(value)
            .ok_or_else(|| D::Error::custom(format!("price {} is not a valid amount", value)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(1550)), "$15.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1099);
        let b = Money::from_cents(1550);

        assert_eq!((a + b).cents(), 2649);
        assert_eq!((b - a).cents(), 451);

        let mut running = Money::zero();
        running += a;
        running += a;
        assert_eq!(running.cents(), 2198);
        running -= a;
        assert_eq!(running, a);
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_cents(1099);

        assert_eq!(price.checked_mul_quantity(3), Some(Money::from_cents(3297)));
        assert_eq!(price.checked_mul_quantity(0), Some(Money::zero()));
        assert_eq!(price.checked_mul_quantity(10_000_000_000_000_000), None);
        assert_eq!(price.checked_mul_quantity(i64::MAX), None);

        let max = Money::from_cents(i64::MAX);
        assert_eq!(price.checked_add(price), Some(Money::from_cents(2198)));
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(price), None);
        assert_eq!(max.saturating_add(price), max);
    }

    #[test]
    fn test_sum() {
        let lines = [Money::from_cents(3297), Money::from_cents(1550)];
        let total: Money = lines.iter().sum();
        assert_eq!(total.cents(), 4847);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_decimal_dollars_rounding() {
        // 10.99 * 100 = 1098.9999999999998 in f64; rounding recovers the cent
        assert_eq!(Money::from_decimal_dollars(10.99).unwrap().cents(), 1099);
        assert_eq!(Money::from_decimal_dollars(299.0).unwrap().cents(), 29900);
        assert_eq!(Money::from_decimal_dollars(0.0).unwrap().cents(), 0);
        assert_eq!(Money::from_decimal_dollars(-5.5).unwrap().cents(), -550);
        assert!(Money::from_decimal_dollars(f64::INFINITY).is_none());
        assert!(Money::from_decimal_dollars(1.0e20).is_none());
    }

    #[test]
    fn test_tax_calculation() {
        let rate = TaxRate::from_bps(800);

        assert_eq!(Money::from_cents(1000).calculate_tax(rate).cents(), 80);
        // $10.99 × 8% = $0.8792 → $0.88
        assert_eq!(Money::from_cents(1099).calculate_tax(rate).cents(), 88);
        // $0.06 × 8% = $0.0048 → $0.00
        assert_eq!(Money::from_cents(6).calculate_tax(rate).cents(), 0);
        // $0.07 × 8% = $0.0056 → $0.01
        assert_eq!(Money::from_cents(7).calculate_tax(rate).cents(), 1);
    }

    #[test]
    fn test_dollars_adapter_rejects_non_numbers() {
        #[derive(Debug, serde::Deserialize)]
        struct Line {
            #[serde(with = "super::dollars")]
            #[allow(dead_code)]
            price: Money,
        }

        assert!(serde_json::from_str::<Line>(r#"{"price": "10.99"}"#).is_err());
        assert!(serde_json::from_str::<Line>(r#"{"price": 1e300}"#).is_err());
    }
}
