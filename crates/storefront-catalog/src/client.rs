//! # Product Source Client
//!
//! Read-only access to the product catalog over HTTP.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Source Request                           │
//! │                                                                         │
//! │  get_product("A49iEB")                                                 │
//! │       │                                                                 │
//! │       ├── id breaks the id rules ────────► NotFound { id } (no request)│
//! │       ▼                                                                 │
//! │  GET {base_url}/api/products/A49iEB  (connect + request timeout)       │
//! │       │                                                                 │
//! │       ├── transport error ───────────────► Request / Timeout           │
//! │       ├── 404 ───────────────────────────► NotFound { id }             │
//! │       ├── other non-2xx ─────────────────► HttpStatus { status, url }  │
//! │       ▼                                                                 │
//! │  JSON decode (price dollars → cents) ────► Decode                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product() ─────────────────────► InvalidProduct              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(Product)                                                           │
//! │                                                                         │
//! │  One attempt per call. No retry, no cache.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use storefront_core::validation::{validate_product, validate_product_id};
use storefront_core::Product;
use tracing::{debug, warn};
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Path of the product collection, relative to the base URL.
const PRODUCTS_PATH: [&str; 2] = ["api", "products"];

// =============================================================================
// Product Source Trait
// =============================================================================

/// A read-only catalog the storefront can look products up in.
///
/// Implementations return validated products only.
pub trait ProductSource: Send + Sync {
    /// Fetches the full product list.
    fn list_products(&self) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;

    /// Fetches a single product by id.
    ///
    /// An unknown id yields [`CatalogError::NotFound`], as does an id no
    /// catalog record could carry (empty, whitespace, `/`).
    fn get_product(&self, id: &str) -> impl Future<Output = CatalogResult<Product>> + Send;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Product Source backed by the catalog HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpProductSource {
    /// Builds a client from validated configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.client.connect_timeout())
            .timeout(config.client.request_timeout())
            .build()
            .map_err(|e| CatalogError::InvalidConfig(format!("HTTP client: {}", e)))?;

        debug!(base_url = %base_url, "Product source created");

        Ok(HttpProductSource { http, base_url })
    }

    /// Shorthand for a client with default timeouts pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> CatalogResult<Self> {
        Self::new(&CatalogConfig::with_base_url(base_url))
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base_url}/api/products[/id]`. Segments are percent-encoded.
    fn endpoint(&self, id: Option<&str>) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CatalogError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?;
            segments.pop_if_empty().extend(PRODUCTS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Performs one GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: Url, id: Option<&str>) -> CatalogResult<T> {
        debug!(url = %url, "Fetching from catalog");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(CatalogError::NotFound { id: id.to_string() });
            }
        }

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Catalog returned error status");
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Runs record validation, tagging failures with the product id.
fn checked(product: Product) -> CatalogResult<Product> {
    match validate_product(&product) {
        Ok(()) => Ok(product),
        Err(source) => {
            warn!(product_id = %product.id, error = %source, "Rejected invalid catalog record");
            Err(CatalogError::InvalidProduct {
                id: product.id,
                source,
            })
        }
    }
}

impl ProductSource for HttpProductSource {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let url = self.endpoint(None)?;
        let products: Vec<Product> = self.fetch(url, None).await?;

        let products = products
            .into_iter()
            .map(checked)
            .collect::<CatalogResult<Vec<_>>>()?;

        debug!(count = products.len(), "Product list fetched");
        Ok(products)
    }

    async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        if let Err(reason) = validate_product_id(id) {
            debug!(product_id = %id, error = %reason, "Skipping fetch for malformed product id");
            return Err(CatalogError::NotFound { id: id.to_string() });
        }

        let url = self.endpoint(Some(id))?;
        let product: Product = self.fetch(url, Some(id)).await?;

        debug!(product_id = %id, "Product fetched");
        checked(product)
    }
}
