//! Cart entries persisted by the storefront.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// One line appended to the stored cart.
///
/// Entries are never merged; adding the same product twice stores two lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartEntry {
    /// Create a single-quantity entry.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
            quantity: 1,
        }
    }
}

impl From<&Product> for CartEntry {
    fn from(product: &Product) -> Self {
        Self::new(product.name.clone(), product.price, product.image.clone())
    }
}

const fn default_quantity() -> u32 {
    1
}
