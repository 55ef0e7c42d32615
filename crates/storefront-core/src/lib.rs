//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! engine and everything it needs as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (presentation)                         │   │
//! │  │    Home ──► Product Details ──► Cart ──► Checkout summary       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(action)                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Cart Store (apps/storefront)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ transition(state, action)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storefront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │ transition│  │  8% tax   │  │   │
//! │  │   │ CartState │  │  TaxRate  │  │ CartAction│  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, CartState)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart engine: actions and the pure transition function
//! - [`checkout`] - Derived checkout summary (tax, grand total)
//! - [`error`] - Validation error type
//! - [`validation`] - Product and input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::{transition, CartAction};
//! use storefront_core::{CartState, Money, Product};
//!
//! let product = Product::new("1", "Test Product", Money::from_cents(1099));
//! let state = transition(&CartState::empty(), &CartAction::AddItem(product));
//!
//! assert_eq!(state.total_items, 1);
//! assert_eq!(state.total_price, Money::from_cents(1099));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{transition, CartAction};
pub use checkout::{CheckoutSummary, STANDARD_TAX_RATE};
pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name accepted from the catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum quantity a view may request for a single cart line.
///
/// ## Business Reason
/// Guards the quantity input on the cart page against typos
/// (1000 instead of 10). Enforced by the app's `update_cart_item`
/// command. The engine itself accepts any positive quantity whose
/// totals fit in an `i64`.
pub const MAX_ITEM_QUANTITY: i64 = 999;
