//! Error types for the storefront core.
//!
//! - [`CatalogError`] - Remote catalog failures (network, HTTP, decoding, lookups)
//! - [`CartError`] - Invalid cart mutations
//! - [`ConfigError`] - Malformed embedded configuration

use thiserror::Error;

use crate::product::ProductId;

/// Failures surfaced by the remote catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Request was rejected before a response arrived (offline, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body was not in the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// Request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// Single-product lookup for an id the service does not know.
    #[error("product {0} not found")]
    NotFound(ProductId),
}

impl CatalogError {
    /// Whether a user-initiated retry can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Cart mutations that violate the cart's quantity rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("quantity {quantity} is outside 1..={max}")]
    InvalidQuantity { quantity: u32, max: u32 },
    #[error("product {0} is not in the cart")]
    UnknownProduct(ProductId),
}

/// Configuration parsing and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
