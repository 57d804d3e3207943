//! Remote catalog service interface.
//!
//! The service exposes whole collections only; paging, searching and
//! sorting are all client-side. [`Endpoint`] builds request paths,
//! [`CatalogSource`] is the async seam catalog data is fetched through,
//! and the `decode_*` helpers turn raw bodies into typed results.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::FilterKey;
use crate::error::CatalogError;
use crate::product::{Product, ProductId};

// ============================================================================
// Endpoints
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /products`
    Products,
    /// `GET /products/category/{category}`
    Category(String),
    /// `GET /products/categories`
    Categories,
    /// `GET /products/{id}`
    Product(ProductId),
}

impl Endpoint {
    /// Endpoint returning the full collection for a filter key.
    pub fn for_key(key: &FilterKey) -> Self {
        match key.category() {
            Some(category) => Self::Category(category.to_string()),
            None => Self::Products,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Products => "/products".to_string(),
            Self::Category(category) => {
                format!("/products/category/{}", urlencoding::encode(category))
            }
            Self::Categories => "/products/categories".to_string(),
            Self::Product(id) => format!("/products/{}", id),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

// ============================================================================
// Decoding
// ============================================================================

pub fn decode_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_categories(body: &str) -> Result<Vec<String>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a single product.
///
/// The service answers unknown ids with `200` and an empty body (or `null`),
/// which is reported as [`CatalogError::NotFound`].
pub fn decode_product(body: &str, id: ProductId) -> Result<Product, CatalogError> {
    let body = body.trim();
    if body.is_empty() {
        info!(%id, "product lookup returned an empty body");
        return Err(CatalogError::NotFound(id));
    }
    let product: Option<Product> = serde_json::from_str(body)?;
    product.ok_or(CatalogError::NotFound(id))
}

// ============================================================================
// CatalogSource
// ============================================================================

/// Anything that can answer catalog queries.
///
/// Implemented over the browser Fetch API in the application and by
/// in-memory fixtures in tests. Futures are not required to be `Send`
/// because the browser runs everything on one thread.
pub trait CatalogSource {
    /// Full ordered collection for a filter key.
    fn products(&self, key: &FilterKey) -> impl Future<Output = Result<Vec<Product>, CatalogError>>;

    fn categories(&self) -> impl Future<Output = Result<Vec<String>, CatalogError>>;

    fn product(&self, id: ProductId) -> impl Future<Output = Result<Product, CatalogError>>;
}

// ============================================================================
// Category cache
// ============================================================================

/// Category labels with the time they were fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCache {
    pub labels: Vec<String>,
    pub fetched_at_ms: u64,
}

impl CategoryCache {
    pub fn new(labels: Vec<String>, fetched_at_ms: u64) -> Self {
        Self {
            labels,
            fetched_at_ms,
        }
    }

    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.fetched_at_ms) < ttl_ms
    }
}
