//! Browser-side error types.
//!
//! [`FetchError`] describes what went wrong talking to the Fetch API and is
//! folded into [`CatalogError`] before it reaches the catalog engine.

use storefront_core::CatalogError;
use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("browser window not available")]
    NoWindow,
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Request rejected before a response arrived (CORS, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status.
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Response body was not text.
    #[error("invalid response content")]
    InvalidContent,
    #[error("request timed out")]
    Timeout,
}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(status) => Self::Http(status),
            FetchError::Timeout => Self::Timeout,
            FetchError::ResponseReadFailed | FetchError::InvalidContent => {
                Self::Decode(err.to_string())
            }
            FetchError::NoWindow | FetchError::RequestCreationFailed | FetchError::Network(_) => {
                Self::Network(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_mapping() {
        assert_eq!(CatalogError::from(FetchError::Http(500)), CatalogError::Http(500));
        assert_eq!(CatalogError::from(FetchError::Timeout), CatalogError::Timeout);
        assert!(matches!(
            CatalogError::from(FetchError::InvalidContent),
            CatalogError::Decode(_)
        ));
        assert_eq!(
            CatalogError::from(FetchError::Network("offline".into())),
            CatalogError::Network("network error: offline".into())
        );
    }
}
