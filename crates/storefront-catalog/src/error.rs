//! # Catalog Error Types
//!
//! Error types for Product Source operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Request        │  │  NotFound               │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  HttpStatus             │ │
//! │  │  ConfigLoad/Save│  │                 │  │  Decode                 │ │
//! │  │                 │  │                 │  │  InvalidProduct         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every failure is terminal for its request: there are no retries.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::ValidationError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Product Source error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Invalid catalog URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the connection broke.
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// Request exceeded the configured timeout.
    #[error("Catalog request timed out")]
    Timeout,

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The catalog has no product with this id (HTTP 404).
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// Any other non-2xx response.
    #[error("Catalog returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Response body was not the expected JSON.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),

    /// A record decoded but broke a product rule.
    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        id: String,
        #[source]
        source: ValidationError,
    },

    // =========================================================================
    // Mock Server Errors
    // =========================================================================
    /// Mock catalog server failed to bind or run.
    #[error("Mock catalog server error: {0}")]
    ServerError(String),
}

impl CatalogError {
    /// Returns true if this is a 404 for a product id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::NotFound {
            id: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: nope");
        assert!(err.is_not_found());

        let err = CatalogError::HttpStatus {
            status: 500,
            url: "http://127.0.0.1:8787/api/products".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog returned HTTP 500 for http://127.0.0.1:8787/api/products"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_product_keeps_source() {
        use std::error::Error as _;

        let err = CatalogError::InvalidProduct {
            id: "broken".to_string(),
            source: ValidationError::Negative {
                field: "price".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Invalid product broken: price cannot be negative");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("price cannot be negative"));
        assert!(!err.is_not_found());
    }
}
