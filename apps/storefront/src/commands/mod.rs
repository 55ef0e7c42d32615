//! # Commands Module
//!
//! All commands exposed to the views.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product list and details fetches
//! └── cart.rs     ◄─── Cart manipulation and checkout summary
//! ```
//!
//! ## State Injection
//! Each command takes only what it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(store: &CartStore) -> CartResponse
//!
//! // Only needs the Product Source
//! async fn list_products(app: &Storefront<S>) -> FetchState<Vec<Product>>
//!
//! // Needs both
//! async fn add_product_by_id(app: &Storefront<S>, id: &str) -> Result<CartResponse, ApiError>
//! ```

pub mod cart;
pub mod product;
