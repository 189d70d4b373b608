//! Catalog product and category records.
//!
//! Field names follow the JSON documents the storefront reads (`oldPrice`,
//! `inStock`). Older storage snapshots spell availability as `available`,
//! which is accepted as an alias.
//!
//! Prices are written back as JSON numbers, matching what the storefront
//! pages store; they are read from either numbers or strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::ProductId;
use super::price::discount_percent;

/// A product in the catalog.
///
/// Only `name` and `price` are required; every other field has an explicit
/// default so a sparse record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric identifier. Storefront page snapshots carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    /// Price before the current discount, if any.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub old_price: Option<Decimal>,
    #[serde(default)]
    pub category: String,
    /// Platform line shown on catalog cards (e.g. `PC / PS5`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Image path, relative to the storefront root.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(
        default = "default_in_stock",
        alias = "available",
        deserialize_with = "deserialize_in_stock"
    )]
    pub in_stock: bool,
    /// Storefront page this product is listed on (e.g. `men.html`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// Create a product with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            price,
            old_price: None,
            category: String::new(),
            platform: None,
            image: String::new(),
            tags: Vec::new(),
            features: Vec::new(),
            in_stock: true,
            page: None,
            featured: false,
            rating: None,
        }
    }

    /// Whole-number percentage off the old price, if the product is discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(self.price, self.old_price)
    }

    /// Whether the name, description, or any tag contains `needle`.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

const fn default_in_stock() -> bool {
    true
}

/// Treat an explicit `null` the same as a missing field.
fn deserialize_in_stock<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// A product category as listed in `categories.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
