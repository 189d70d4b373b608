//! Integration tests for Angry Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p angry-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Stored catalog -> page filter -> rendered document
//! - `catalog_resources` - Resource files -> catalog manager -> rendered cards
//!
//! The tests need no services; each one works in its own temporary directory.

use std::path::Path;

use serde_json::Value;

/// Write `value` as JSON to `name` inside `dir`.
///
/// # Panics
///
/// Panics if the file cannot be written.
#[allow(clippy::expect_used)]
pub fn write_json(dir: &Path, name: &str, value: &Value) {
    std::fs::write(dir.join(name), value.to_string()).expect("Failed to write fixture");
}

/// Write raw text to `name` inside `dir`.
///
/// # Panics
///
/// Panics if the file cannot be written.
#[allow(clippy::expect_used)]
pub fn write_text(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).expect("Failed to write fixture");
}

/// Page-tagged products as a storefront admin would store them.
#[must_use]
pub fn storefront_products() -> Value {
    serde_json::json!([
        {
            "name": "Black Hoodie",
            "price": 450,
            "category": "Hoodies",
            "image": "img/hoodie.jpg",
            "tags": ["winter", "cotton", "unisex", "new"],
            "page": "men.html"
        },
        {
            "name": "Leather Belt",
            "price": 180,
            "category": "Accessories",
            "image": "img/belt.jpg",
            "available": false,
            "page": "men.html"
        },
        {
            "name": "Summer Dress",
            "price": 799.5,
            "category": "Dresses",
            "image": "img/dress.jpg",
            "page": "women.html"
        },
        {
            "name": "Gift Card",
            "price": 100,
            "page": "index.html"
        }
    ])
}

/// Catalog resources: products with ids, discounts, features, and ratings.
#[must_use]
pub fn catalog_products() -> Value {
    serde_json::json!({
        "products": [
            { "id": 1, "name": "Trail Jacket", "description": "Waterproof shell", "price": 50,
              "category": "Men", "platform": "Trail", "featured": false, "rating": 4.1,
              "tags": ["outdoor"] },
            { "id": 2, "name": "Silk Scarf", "price": 10, "oldPrice": 20, "category": "Women",
              "featured": true, "rating": 4.9, "features": ["Silk", "Hand made", "Gift box"] },
            { "id": 3, "name": "Canvas Belt", "price": 30, "category": "men",
              "featured": true, "inStock": false },
            { "name": "Broken record" }
        ]
    })
}

/// Category resource matching [`catalog_products`].
#[must_use]
pub fn catalog_categories() -> Value {
    serde_json::json!({
        "categories": [
            { "id": "men", "name": "Men", "icon": "fa-male" },
            { "id": "women", "name": "Women" }
        ]
    })
}
