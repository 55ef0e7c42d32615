//! # Product Commands
//!
//! Commands for the product list and product details views.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Fetch Flow                                   │
//! │                                                                         │
//! │  View mounts (/products or /products/:id)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  renders FetchState::Loading                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products() / get_product(id)                                     │
//! │       │                                                                 │
//! │       ├── Ready(data) ──────────► product grid / details page          │
//! │       ├── Failed(NotFound) ─────► "Product not found" fallback         │
//! │       └── Failed(other) ────────► error message                        │
//! │                                                                         │
//! │  One request per mount. Nothing is cached or retried.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_catalog::{FetchState, ProductSource};
use storefront_core::Product;
use tracing::{debug, warn};

use crate::Storefront;

/// Fetches the product list.
pub async fn list_products<S: ProductSource>(app: &Storefront<S>) -> FetchState<Vec<Product>> {
    debug!("list_products command");

    let state = FetchState::from_result(app.source().list_products().await);
    if let Some(err) = state.error() {
        warn!(error = %err, "Product list fetch failed");
    }
    state
}

/// Fetches one product for the details view.
pub async fn get_product<S: ProductSource>(app: &Storefront<S>, id: &str) -> FetchState<Product> {
    debug!(product_id = %id, "get_product command");

    let state = FetchState::from_result(app.source().get_product(id).await);
    match state.error() {
        Some(err) if err.is_not_found() => debug!(product_id = %id, "Product not found"),
        Some(err) => warn!(product_id = %id, error = %err, "Product fetch failed"),
        None => {}
    }
    state
}
