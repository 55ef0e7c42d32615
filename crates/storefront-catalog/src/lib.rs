//! # storefront-catalog: Product Source for the Storefront
//!
//! This crate is the storefront's only asynchronous boundary. It fetches
//! product records from the catalog HTTP API, validates them, and hands
//! them to the views as a [`FetchState`].
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Source Layer                             │
//! │                                                                         │
//! │   Views / commands                                                     │
//! │        │  list_products() / get_product(id)                            │
//! │        ▼                                                                │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐  │
//! │  │  ProductSource trait │        │  CatalogConfig                   │  │
//! │  │                      │◀───────│  catalog.toml + STOREFRONT_* env │  │
//! │  │  HttpProductSource   │        └──────────────────────────────────┘  │
//! │  │  (reqwest, 1 attempt)│                                               │
//! │  └──────────┬───────────┘                                               │
//! │             │ GET /api/products[/{id}]                                  │
//! │             ▼                                                           │
//! │  ┌──────────────────────┐                                               │
//! │  │  Catalog HTTP API    │  production service, or MockCatalogServer   │
//! │  │                      │  (axum) for development and tests           │
//! │  └──────────────────────┘                                               │
//! │                                                                         │
//! │  The cart engine never calls into this crate.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`client`] - `ProductSource` trait and the reqwest implementation
//! - [`config`] - Client and mock server configuration
//! - [`error`] - Catalog error types
//! - [`fetch`] - `FetchState` tri-state for views
//! - [`mock`] - Mock catalog server with the seed products
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_catalog::{CatalogConfig, HttpProductSource, ProductSource};
//!
//! let config = CatalogConfig::load_or_default(None);
//! let source = HttpProductSource::new(&config)?;
//!
//! let products = source.list_products().await?;
//! println!("{} products", products.len());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod mock;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{HttpProductSource, ProductSource};
pub use config::{CatalogConfig, ClientSettings, MockSettings, DEFAULT_CATALOG_PORT};
pub use error::{CatalogError, CatalogResult};
pub use fetch::FetchState;
pub use mock::{seed_products, MockCatalog, MockCatalogHandle, MockCatalogServer};
