//! Application configuration.
//!
//! Runtime settings are read from `assets/config/storefront.toml`, embedded
//! at compile time. Presentation constants live here as well.

use storefront_core::{ConfigError, StorefrontConfig};

pub use storefront_core::config::{
    APP_NAME, CART_STORAGE_KEY, CATEGORIES_CACHE_KEY, THEME_STORAGE_KEY,
};

/// Embedded runtime configuration.
pub const CONFIG_TOML: &str = include_str!("../assets/config/storefront.toml");

/// Parse the embedded configuration.
pub fn load() -> Result<StorefrontConfig, ConfigError> {
    StorefrontConfig::from_toml_str(CONFIG_TOML)
}

// =============================================================================
// Footer
// =============================================================================

pub const ABOUT_TEXT: &str =
    "We offer the best products at competitive prices with excellent customer service.";
pub const CONTACT_EMAIL: &str = "info@estore.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = load().unwrap();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.api_base_url, "https://fakestoreapi.com");
        assert_eq!(config.search_debounce_ms, 300);
    }
}
