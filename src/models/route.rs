//! Hash-based routing.

use storefront_core::ProductId;

use crate::utils::dom;

/// Application routes.
/// URL format: `#/`, `#/cart`, `#/product/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Product catalog: `#/` or empty hash.
    Catalog,
    /// Shopping cart: `#/cart`
    Cart,
    /// Product detail: `#/product/{id}`
    Product(ProductId),
    /// Anything else, keeping the unmatched path for display.
    NotFound(String),
}

impl AppRoute {
    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path.split('/').collect::<Vec<_>>().as_slice() {
            [""] => Self::Catalog,
            ["cart"] => Self::Cart,
            ["product", id] => id
                .parse()
                .map(Self::Product)
                .unwrap_or_else(|_| Self::NotFound(path.to_string())),
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Convert route to URL hash (usable as an `href`).
    pub fn to_hash(&self) -> String {
        match self {
            Self::Catalog => "#/".to_string(),
            Self::Cart => "#/cart".to_string(),
            Self::Product(id) => format!("#/product/{}", id),
            Self::NotFound(path) => format!("#/{}", path),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}
