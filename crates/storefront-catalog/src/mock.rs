//! # Mock Catalog Server
//!
//! A small axum server that speaks the Product Source contract, for local
//! development and for tests.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      MockCatalogServer (Axum)                           │
//! │                                                                         │
//! │  GET /api/products        ──▶ 200 JSON array, seed order               │
//! │  GET /api/products/{id}   ──▶ 200 JSON product                         │
//! │                           ──▶ 404 text/plain "Not found"               │
//! │  GET /health              ──▶ 200 "OK"                                 │
//! │                                                                         │
//! │  failing_with(status): every /api route answers with that status,      │
//! │  used to exercise the client's error paths.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use storefront_core::{Money, Product};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::MockSettings;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Data
// =============================================================================

/// The three products the storefront ships with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("A49iEB", "Premium Headphones", Money::from_dollars(299))
            .with_description("High-quality wireless headphones with noise cancellation")
            .with_features([
                "Active Noise Cancellation",
                "30-hour battery life",
                "Premium leather headband",
                "Bluetooth 5.0 connectivity",
                "Quick charge (5 min = 2 hours playback)",
            ]),
        Product::new("MmbTrI", "Smart Watch", Money::from_dollars(199))
            .with_description("Advanced fitness tracking and smart notifications")
            .with_features([
                "Heart rate monitoring",
                "GPS tracking",
                "Water resistant (50m)",
                "7-day battery life",
                "Sleep tracking",
            ]),
        Product::new("kcxX6Z", "Laptop Stand", Money::from_dollars(79))
            .with_description("Ergonomic aluminum laptop stand for better posture")
            .with_features([
                "Adjustable height and angle",
                "Premium aluminum construction",
                "Non-slip base",
                "Supports laptops up to 17\"",
                "Foldable design",
            ]),
    ]
}

/// Products served by the mock, in listing order.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    products: Vec<Product>,
    failure: Option<StatusCode>,
}

impl MockCatalog {
    /// Serves exactly `products`. Records are not validated here.
    pub fn new(products: Vec<Product>) -> Self {
        MockCatalog {
            products,
            failure: None,
        }
    }

    /// Serves the seed products.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Makes every catalog route answer with `status` instead of data.
    ///
    /// Values outside 100..=999 fall back to 500.
    pub fn failing_with(mut self, status: u16) -> Self {
        self.failure = Some(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));
        self
    }

    /// Looks up a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

// =============================================================================
// Server
// =============================================================================

/// The mock catalog server.
pub struct MockCatalogServer {
    catalog: Arc<MockCatalog>,
}

/// Handle for a running mock server.
pub struct MockCatalogHandle {
    local_addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl MockCatalogHandle {
    /// Address the server is bound to (resolved when port 0 was requested).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// `http://{local_addr}`, ready for `CatalogConfig::with_base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(self) -> CatalogResult<()> {
        self.shutdown_tx
            .send(())
            .await
            .map_err(|_| CatalogError::ServerError("Mock catalog shutdown channel closed".into()))?;

        self.task
            .await
            .map_err(|e| CatalogError::ServerError(format!("Mock catalog task failed: {}", e)))
    }
}

impl MockCatalogServer {
    /// Creates a server for `catalog`.
    pub fn new(catalog: MockCatalog) -> Self {
        MockCatalogServer {
            catalog: Arc::new(catalog),
        }
    }

    /// Builds the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/products", get(list_handler))
            .route("/api/products/{id}", get(product_handler))
            .route("/health", get(health_handler))
            .with_state(self.catalog.clone())
    }

    /// Starts the server using the configured bind address.
    pub async fn start_with(self, settings: &MockSettings) -> CatalogResult<MockCatalogHandle> {
        self.start(&settings.bind_address()).await
    }

    /// Binds `bind_addr`, spawns the server and returns a handle.
    pub async fn start(self, bind_addr: &str) -> CatalogResult<MockCatalogHandle> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let app = self.router();

        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| CatalogError::ServerError(format!("Failed to bind to {}: {}", bind_addr, e)))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| CatalogError::ServerError(e.to_string()))?;

        info!(
            addr = %local_addr,
            products = self.catalog.products.len(),
            "Mock catalog server started"
        );

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_rx.recv().await;
                    info!("Mock catalog server shutting down");
                })
                .await
                .ok();
        });

        Ok(MockCatalogHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

fn failure_response(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], status.to_string()).into_response()
}

async fn list_handler(State(catalog): State<Arc<MockCatalog>>) -> Response {
    if let Some(status) = catalog.failure {
        return failure_response(status);
    }

    debug!(count = catalog.products.len(), "Serving product list");
    Json(catalog.products.clone()).into_response()
}

async fn product_handler(
    State(catalog): State<Arc<MockCatalog>>,
    Path(id): Path<String>,
) -> Response {
    if let Some(status) = catalog.failure {
        return failure_response(status);
    }

    match catalog.find(&id) {
        Some(product) => {
            debug!(product_id = %id, "Serving product");
            Json(product.clone()).into_response()
        }
        None => {
            debug!(product_id = %id, "Unknown product requested");
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain")],
                "Not found",
            )
                .into_response()
        }
    }
}
