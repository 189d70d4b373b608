//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_STORAGE_DIR` - Directory backing key-value storage (default: `.storage`)
//! - `STOREFRONT_RESOURCE_BASE` - Directory or `http(s)://` base holding
//!   `products.json` and `categories.json` (default: `data`)
//! - `STOREFRONT_PRODUCTS_KEY` - Storage key of the page-tagged product list
//!   (default: `angryStoreProducts_v2`)
//! - `STOREFRONT_CART_KEY` - Storage key of the cart (default: `cart`)
//! - `STOREFRONT_HOME_PAGE` - Page name used when the location has no file name
//!   (default: `index.html`)
//! - `STOREFRONT_CONTAINER_ID` - Id of the element that receives product cards
//!   (default: `products-container`)
//! - `STOREFRONT_PLACEHOLDER_IMAGE` - Image shown when a product image fails to load
//!   (default: `img/placeholder.jpg`)
//! - `STOREFRONT_DETAIL_PAGE` - Product detail page linked from catalog cards
//!   (default: `product.html`)
//! - `STOREFRONT_CURRENCY` - Currency code for displayed prices (default: `EGP`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use angry_store_core::CurrencyCode;
use thiserror::Error;

use crate::render::RenderOptions;

pub const DEFAULT_STORAGE_DIR: &str = ".storage";
pub const DEFAULT_RESOURCE_BASE: &str = "data";
pub const DEFAULT_PRODUCTS_KEY: &str = "angryStoreProducts_v2";
pub const DEFAULT_CART_KEY: &str = "cart";
pub const DEFAULT_HOME_PAGE: &str = "index.html";
pub const DEFAULT_CONTAINER_ID: &str = "products-container";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "img/placeholder.jpg";
pub const DEFAULT_DETAIL_PAGE: &str = "product.html";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory backing key-value storage
    pub storage_dir: PathBuf,
    /// Directory or URL holding the static JSON resources
    pub resource_base: String,
    /// Storage key of the page-tagged product list
    pub products_key: String,
    /// Storage key of the cart
    pub cart_key: String,
    /// Page name used for locations without a file name
    pub home_page: String,
    /// Id of the element that receives product cards
    pub container_id: String,
    /// Fallback image path
    pub placeholder_image: String,
    /// Product detail page linked from catalog cards
    pub detail_page: String,
    /// Currency used to display prices
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            resource_base: DEFAULT_RESOURCE_BASE.to_string(),
            products_key: DEFAULT_PRODUCTS_KEY.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            home_page: DEFAULT_HOME_PAGE.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            currency: CurrencyCode::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let currency = match lookup("STOREFRONT_CURRENCY") {
            Some(raw) => raw.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_CURRENCY".to_string(), e)
            })?,
            None => CurrencyCode::default(),
        };

        let container_id = or_default("STOREFRONT_CONTAINER_ID", DEFAULT_CONTAINER_ID);
        if container_id.trim().is_empty() || container_id.contains(['"', '\'']) {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_CONTAINER_ID".to_string(),
                "must be a non-empty id without quotes".to_string(),
            ));
        }

        Ok(Self {
            storage_dir: PathBuf::from(or_default("STOREFRONT_STORAGE_DIR", DEFAULT_STORAGE_DIR)),
            resource_base: or_default("STOREFRONT_RESOURCE_BASE", DEFAULT_RESOURCE_BASE),
            products_key: or_default("STOREFRONT_PRODUCTS_KEY", DEFAULT_PRODUCTS_KEY),
            cart_key: or_default("STOREFRONT_CART_KEY", DEFAULT_CART_KEY),
            home_page: or_default("STOREFRONT_HOME_PAGE", DEFAULT_HOME_PAGE),
            container_id,
            placeholder_image: or_default("STOREFRONT_PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER_IMAGE),
            detail_page: or_default("STOREFRONT_DETAIL_PAGE", DEFAULT_DETAIL_PAGE),
            currency,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Card rendering options derived from this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            placeholder_image: self.placeholder_image.clone(),
            detail_page: self.detail_page.clone(),
            currency: self.currency,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.storage_dir, PathBuf::from(".storage"));
        assert_eq!(config.resource_base, "data");
        assert_eq!(config.products_key, "angryStoreProducts_v2");
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.home_page, "index.html");
        assert_eq!(config.container_id, "products-container");
        assert_eq!(config.currency, CurrencyCode::EGP);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_STORAGE_DIR", "/var/lib/store"),
            ("STOREFRONT_RESOURCE_BASE", "https://cdn.example.com/data/"),
            ("STOREFRONT_CURRENCY", "usd"),
            ("STOREFRONT_HOME_PAGE", "home.html"),
            ("SENTRY_DSN", ""),
        ]))
        .unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/store"));
        assert_eq!(config.resource_base, "https://cdn.example.com/data/");
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.home_page, "home.html");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_currency() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_CURRENCY", "BTC")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_CURRENCY"));
    }

    #[test]
    fn test_invalid_container_id() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_CONTAINER_ID", "a\"b")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_options_follow_config() {
        let config = StorefrontConfig {
            placeholder_image: "img/none.png".to_string(),
            currency: CurrencyCode::GBP,
            ..StorefrontConfig::default()
        };

        let options = config.render_options();
        assert_eq!(options.placeholder_image, "img/none.png");
        assert_eq!(options.detail_page, "product.html");
        assert_eq!(options.currency, CurrencyCode::GBP);
    }
}
