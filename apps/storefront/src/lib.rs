//! # Storefront Application Library
//!
//! Session root for the storefront: one Cart Store, one Product Source, and
//! the commands the views call.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (Storefront root, logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── cart.rs     ◄─── Cart Store (dispatch + snapshots)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product list/details fetches
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_app::{commands, Storefront};
//! use storefront_catalog::CatalogConfig;
//!
//! storefront_app::init_tracing();
//!
//! let app = Storefront::from_config(&CatalogConfig::load_or_default(None))?;
//! let products = commands::product::list_products(&app).await;
//! let cart = commands::cart::add_product_by_id(&app, "A49iEB").await?;
//! ```

pub mod commands;
pub mod error;
pub mod state;

use storefront_catalog::{CatalogConfig, CatalogResult, HttpProductSource, ProductSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::CartStore;

/// The session's application root.
///
/// Created once per session and passed by reference to the commands.
/// There is no global instance.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront<S>                                     │
/// │                                                                         │
/// │  ┌──────────────────────┐         ┌──────────────────────────────┐     │
/// │  │  CartStore           │         │  S: ProductSource            │     │
/// │  │  (sync, no I/O)      │         │  (async, network)            │     │
/// │  └──────────────────────┘         └──────────────────────────────┘     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct Storefront<S = HttpProductSource> {
    cart: CartStore,
    source: S,
}

impl<S: ProductSource> Storefront<S> {
    /// Creates a session with an empty cart over `source`.
    pub fn new(source: S) -> Self {
        Storefront {
            cart: CartStore::new(),
            source,
        }
    }

    /// The session's Cart Store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The Product Source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl Storefront<HttpProductSource> {
    /// Creates a session talking to the configured catalog.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let source = HttpProductSource::new(config)?;
        info!(catalog = %source.base_url(), "Storefront session started");
        Ok(Self::new(source))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_app=trace` - Show trace for the app crate only
/// - Default: INFO, DEBUG for storefront crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let app = Storefront::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(app.source().base_url().as_str(), "http://127.0.0.1:8787/");
        assert!(app.cart().get_state().is_empty());
    }

    #[test]
    fn test_from_invalid_config() {
        let config = CatalogConfig::with_base_url("mailto:shop@example.com");
        assert!(Storefront::from_config(&config).is_err());
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
