//! Storefront configuration.
//!
//! Runtime-tunable settings live in [`StorefrontConfig`], parsed from TOML with
//! a serde default for every field. Fixed identifiers stay as constants.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Constants
// =============================================================================

/// Application name shown in the header and footer.
pub const APP_NAME: &str = "E-Store";

/// localStorage key for the persisted cart.
pub const CART_STORAGE_KEY: &str = "storefront.cart";

/// localStorage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "storefront.theme";

/// sessionStorage key for the cached category list.
pub const CATEGORIES_CACHE_KEY: &str = "storefront.categories";

mod defaults {
    use rust_decimal::Decimal;

    pub fn api_base_url() -> String {
        "https://fakestoreapi.com".to_string()
    }
    pub fn page_size() -> usize {
        8
    }
    pub fn search_debounce_ms() -> u32 {
        300
    }
    pub fn category_ttl_ms() -> u64 {
        24 * 60 * 60 * 1000
    }
    pub fn fetch_timeout_ms() -> i32 {
        10_000
    }
    pub fn sentinel_root_margin() -> String {
        "200px".to_string()
    }
    pub fn max_quantity() -> u32 {
        10
    }
    pub fn tax_rate() -> Decimal {
        Decimal::new(10, 2)
    }
    pub fn log_level() -> String {
        "info".to_string()
    }
}

// =============================================================================
// StorefrontConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Base URL of the remote catalog service, without trailing slash.
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: String,
    /// Products per catalog page.
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,
    /// Quiet window before search text propagates.
    #[serde(default = "defaults::search_debounce_ms")]
    pub search_debounce_ms: u32,
    /// How long a fetched category list stays fresh.
    #[serde(default = "defaults::category_ttl_ms")]
    pub category_ttl_ms: u64,
    #[serde(default = "defaults::fetch_timeout_ms")]
    pub fetch_timeout_ms: i32,
    /// Proximity threshold for the load-more sentinel (CSS margin syntax).
    #[serde(default = "defaults::sentinel_root_margin")]
    pub sentinel_root_margin: String,
    /// Upper bound for a single cart line.
    #[serde(default = "defaults::max_quantity")]
    pub max_quantity: u32,
    #[serde(default = "defaults::tax_rate")]
    pub tax_rate: Decimal,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::api_base_url(),
            page_size: defaults::page_size(),
            search_debounce_ms: defaults::search_debounce_ms(),
            category_ttl_ms: defaults::category_ttl_ms(),
            fetch_timeout_ms: defaults::fetch_timeout_ms(),
            sentinel_root_margin: defaults::sentinel_root_margin(),
            max_quantity: defaults::max_quantity(),
            tax_rate: defaults::tax_rate(),
            log_level: defaults::log_level(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(source)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".into()));
        }
        if self.max_quantity == 0 {
            return Err(ConfigError::Invalid("max_quantity must be positive".into()));
        }
        if self.tax_rate.is_sign_negative() {
            return Err(ConfigError::Invalid("tax_rate must not be negative".into()));
        }
        if self.fetch_timeout_ms <= 0 {
            return Err(ConfigError::Invalid("fetch_timeout_ms must be positive".into()));
        }
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.page_size, 8);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.tax_rate, dec!(0.10));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            api_base_url = "http://localhost:8080/"
            page_size = 4
            tax_rate = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 4);
        assert_eq!(config.tax_rate, dec!(0.2));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = StorefrontConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_non_positive_timeout() {
        for source in ["fetch_timeout_ms = 0", "fetch_timeout_ms = -500"] {
            let err = StorefrontConfig::from_toml_str(source).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{source}");
        }
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = StorefrontConfig::from_toml_str("pagesize = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
