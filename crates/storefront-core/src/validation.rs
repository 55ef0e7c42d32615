//! # Validation Module
//!
//! Checks applied to data crossing into the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Product Source (storefront-catalog)                          │
//! │  ├── Type validation (deserialization, dollars → cents)                │
//! │  └── validate_product() on every record, THIS MODULE                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: View inputs (quantity box, product id from the route)        │
//! │  └── validate_quantity(), validate_product_id()                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart Engine: accepts any action, never fails                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_product, validate_quantity};
//! use storefront_core::{Money, Product};
//!
//! validate_product(&Product::new("A49iEB", "Premium Headphones", Money::from_dollars(299))).unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_ITEM_QUANTITY, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product id accepted (ids appear in URL paths).
const MAX_PRODUCT_ID_LEN: usize = 64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - No whitespace or `/` (the id is a URL path segment)
///
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert!(validate_product_id("kcxX6Z").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("a/b").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if id.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace or '/'".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a feature list: every entry must have text.
pub fn validate_features(features: &[String]) -> ValidationResult<()> {
    if features.iter().any(|feature| feature.trim().is_empty()) {
        return Err(ValidationError::Required {
            field: "feature".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (free items).
///
/// ```rust
/// use storefront_core::validation::validate_price;
/// use storefront_core::Money;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity typed into the cart page.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// The engine treats zero as "remove"; views call this only for explicit
/// quantity input, never for the remove button.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a whole product record from the catalog.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_features(&product.features)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("A49iEB").is_ok());
        assert!(validate_product_id("1").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop Stand").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_product() {
        let product = Product::new("MmbTrI", "Smart Watch", Money::from_dollars(199))
            .with_features(["Heart rate monitoring", "GPS tracking"]);
        assert!(validate_product(&product).is_ok());

        let negative = Product::new("x", "Refund", Money::from_cents(-1));
        assert_eq!(
            validate_product(&negative),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );

        let blank_feature = product.clone().with_features(["ok", " "]);
        assert!(validate_product(&blank_feature).is_err());

        let nameless = Product::new("x", "", Money::zero());
        assert!(validate_product(&nameless).is_err());
    }
}
