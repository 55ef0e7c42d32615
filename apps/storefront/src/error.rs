//! # API Error Type
//!
//! Unified error type for view commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View                        Rust Backend                               │
//! │  ────                        ────────────                               │
//! │                                                                         │
//! │  "Add to Cart" on /products/:id                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::NotFound { id } ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Validation Error? ─── ValidationError ───────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The cart engine itself never fails; errors only come from the        │
//! │  Product Source and from input validation.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::CatalogError;
use storefront_core::ValidationError;
use thiserror::Error;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the view receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: A49iEB"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product does not exist (the "not found" fallback view)
    NotFound,

    /// Catalog unreachable, slow, or answering with errors
    CatalogUnavailable,

    /// Input or record validation failed
    ValidationError,

    /// Misconfiguration or other internal failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts Product Source errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { id } => ApiError::not_found("Product", &id),
            CatalogError::InvalidProduct { id, source } => {
                tracing::warn!(product_id = %id, "Catalog sent an invalid product: {}", source);
                ApiError::validation(format!("Product {} is invalid: {}", id, source))
            }
            CatalogError::Request(_)
            | CatalogError::Timeout
            | CatalogError::HttpStatus { .. }
            | CatalogError::Decode(_) => {
                // Log the actual error but return a generic message
                tracing::error!("Catalog request failed: {}", err);
                ApiError::new(ErrorCode::CatalogUnavailable, "Product catalog is unavailable")
            }
            CatalogError::InvalidConfig(_)
            | CatalogError::InvalidUrl(_)
            | CatalogError::ConfigLoadFailed(_)
            | CatalogError::ConfigSaveFailed(_)
            | CatalogError::ServerError(_) => {
                tracing::error!("Catalog misconfigured: {}", err);
                ApiError::internal(err.to_string())
            }
        }
    }
}

/// Converts rejected view input to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}
