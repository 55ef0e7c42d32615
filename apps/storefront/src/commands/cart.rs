//! # Cart Commands
//!
//! Commands the views call to read and change the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                        │
//! │  │  Cart    │     │          │     │ Summary  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                                                │
//! │       │           add_to_cart                                           │
//! │       │           add_product_by_id                                     │
//! │       │           update_cart_item                                      │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       │                ▼                                                │
//! │       └─────────── clear_cart                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::ProductSource;
use storefront_core::validation::validate_quantity;
use storefront_core::{CartAction, CartItem, CartState, CheckoutSummary, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartStore;
use crate::Storefront;

/// Cart response including items and the checkout summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub summary: CheckoutSummary,
}

impl From<&CartState> for CartResponse {
    fn from(state: &CartState) -> Self {
        CartResponse {
            items: state.items.clone(),
            summary: CheckoutSummary::for_cart(state),
        }
    }
}

impl From<CartState> for CartResponse {
    fn from(state: CartState) -> Self {
        let summary = CheckoutSummary::for_cart(&state);
        CartResponse {
            items: state.items,
            summary,
        }
    }
}

/// Gets the current cart contents.
///
/// ## Cart Page
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shopping Cart                                                          │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Premium Headphones   $299.00   [ 2 ]   $598.00    Remove      │    │
/// │  │  Laptop Stand          $79.00   [ 1 ]    $79.00    Remove      │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal (3 items)                      $677.00               │    │
/// │  │  Shipping                                Free                  │    │
/// │  │  Tax (8%)                                 $54.16               │    │
/// │  │  ──────────────────────────────────────────────────            │    │
/// │  │  Total                                   $731.16               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(store: &CartStore) -> CartResponse {
    debug!("get_cart command");
    store.with_state(|state| CartResponse::from(state))
}

/// Adds one unit of an already-fetched product.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: appended as a new line with quantity 1
pub fn add_to_cart(store: &CartStore, product: Product) -> CartResponse {
    debug!(product_id = %product.id, "add_to_cart command");
    store.dispatch(CartAction::AddItem(product)).into()
}

/// Fetches a product from the catalog, then adds it.
///
/// This is the product details "Add to Cart" flow. The cart is untouched
/// when the fetch fails.
///
/// ## Errors
/// - `NOT_FOUND`: the catalog has no such product, or the id is malformed
/// - `CATALOG_UNAVAILABLE`: transport failure, timeout, or bad status
/// - `VALIDATION_ERROR`: the catalog returned an invalid record
pub async fn add_product_by_id<S: ProductSource>(
    app: &Storefront<S>,
    id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %id, "add_product_by_id command");

    let product = app.source().get_product(id).await?;
    Ok(add_to_cart(app.cart(), product))
}

/// Sets the quantity of a line.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Unknown id: cart unchanged
///
/// ## Errors
/// - `VALIDATION_ERROR`: quantity above `MAX_ITEM_QUANTITY`. Nothing is
///   dispatched, so subscribers see no new snapshot.
pub fn update_cart_item(
    store: &CartStore,
    id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %id, quantity, "update_cart_item command");

    if quantity > 0 {
        validate_quantity(quantity)?;
    }

    Ok(store
        .dispatch(CartAction::UpdateQuantity {
            id: id.to_string(),
            quantity,
        })
        .into())
}

/// Removes a line. Unknown ids leave the cart unchanged.
pub fn remove_from_cart(store: &CartStore, id: &str) -> CartResponse {
    debug!(product_id = %id, "remove_from_cart command");
    store.dispatch(CartAction::RemoveItem(id.to_string())).into()
}

/// Empties the cart.
pub fn clear_cart(store: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    store.dispatch(CartAction::ClearCart).into()
}

/// Whether the product is in the cart (drives the "In Cart" badge).
pub fn is_in_cart(store: &CartStore, id: &str) -> bool {
    store.is_in_cart(id)
}

/// Quantity of the product in the cart, 0 when absent.
pub fn cart_quantity(store: &CartStore, id: &str) -> i64 {
    store.quantity_of(id)
}

/// The order summary lines for the cart page.
pub fn checkout_summary(store: &CartStore) -> CheckoutSummary {
    store.with_state(CheckoutSummary::for_cart)
}
