//! Catalog loading from storage and static JSON resources.
//!
//! Every public loader returns plain data and never an error: storage,
//! network, and parse failures are logged and turn into an empty list, so a
//! broken data source renders as "no products" instead of failing the page.
//! Records are validated one by one; a record that does not match the
//! product schema is skipped and the rest of the list is kept.

use std::fmt;
use std::path::PathBuf;

use angry_store_core::{Category, Product};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::error::CatalogError;
use crate::storage::{KeyValueStore, read_json, write_json};

/// File name of the products resource.
pub const PRODUCTS_RESOURCE: &str = "products.json";
/// File name of the categories resource.
pub const CATEGORIES_RESOURCE: &str = "categories.json";

// =============================================================================
// Storage
// =============================================================================

/// Load the product list stored under `key`.
///
/// A missing key yields an empty list. Unreadable or malformed data is logged
/// and also yields an empty list.
#[instrument(skip(store))]
pub fn load_stored_products(store: &dyn KeyValueStore, key: &str) -> Vec<Product> {
    match try_load_stored_products(store, key) {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products from storage");
            Vec::new()
        }
    }
}

fn try_load_stored_products(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<Product>, CatalogError> {
    let Some(records) = read_json::<Vec<Value>>(store, key)? else {
        debug!("No stored products");
        return Ok(Vec::new());
    };
    Ok(parse_records(records, "product"))
}

/// Decode each record independently, dropping the ones that fail validation.
pub(crate) fn parse_records<T: DeserializeOwned>(records: Vec<Value>, kind: &str) -> Vec<T> {
    let total = records.len();
    let parsed: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping invalid {kind} record");
                None
            }
        })
        .collect();
    debug!(total, kept = parsed.len(), "Parsed {kind} records");
    parsed
}

/// Replace the product list stored under `key` with `products`.
///
/// # Errors
///
/// Returns an error if the list cannot be written.
#[instrument(skip(store, products), fields(count = products.len()))]
pub fn seed_products(
    store: &dyn KeyValueStore,
    key: &str,
    products: &[Product],
) -> Result<(), CatalogError> {
    write_json(store, key, products)?;
    tracing::info!("Seeded stored products");
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductList {
    Bare(Vec<Value>),
    Document { products: Vec<Value> },
}

/// Parse a product list given either as a bare array or as `{ "products": [...] }`.
///
/// Invalid records are skipped.
///
/// # Errors
///
/// Returns an error if `body` is not JSON of either shape.
pub fn parse_product_list(body: &str) -> Result<Vec<Product>, CatalogError> {
    let records = match serde_json::from_str::<ProductList>(body)? {
        ProductList::Bare(records) | ProductList::Document { products: records } => records,
    };
    Ok(parse_records(records, "product"))
}

// =============================================================================
// Static resources
// =============================================================================

/// Where the static JSON resources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// A local directory.
    Directory(PathBuf),
    /// An HTTP(S) base URL; always ends in `/`.
    Url(Url),
}

impl ResourceSource {
    /// Interpret a configured resource base.
    ///
    /// `http://` and `https://` bases become URLs, anything else is a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP base is not a valid URL.
    pub fn parse(base: &str) -> Result<Self, CatalogError> {
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Ok(Self::Directory(PathBuf::from(base)));
        }

        let mut url =
            Url::parse(base).map_err(|e| CatalogError::InvalidLocation(format!("{base}: {e}")))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self::Url(url))
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "{}", dir.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Deserialize)]
struct ProductsDocument {
    products: Vec<Value>,
}

#[derive(Deserialize)]
struct CategoriesDocument {
    categories: Vec<Value>,
}

/// Fetches `products.json` and `categories.json` from a [`ResourceSource`].
///
/// No retries and no caching: each call performs one read.
#[derive(Debug, Clone)]
pub struct ResourceFetcher {
    client: reqwest::Client,
    source: ResourceSource,
}

impl ResourceFetcher {
    /// Create a fetcher for `source`.
    #[must_use]
    pub fn new(source: ResourceSource) -> Self {
        Self {
            client: reqwest::Client::new(),
            source,
        }
    }

    /// The configured resource source.
    #[must_use]
    pub const fn source(&self) -> &ResourceSource {
        &self.source
    }

    /// Fetch the product list, or an empty list on any failure.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch products");
                Vec::new()
            }
        }
    }

    /// Fetch the category list, or an empty list on any failure.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn fetch_categories(&self) -> Vec<Category> {
        match self.try_fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch categories");
                Vec::new()
            }
        }
    }

    /// Fetch products and categories concurrently.
    ///
    /// The two reads complete in no particular order; each fails independently.
    pub async fn fetch_catalog(&self) -> (Vec<Product>, Vec<Category>) {
        tokio::join!(self.fetch_products(), self.fetch_categories())
    }

    async fn try_fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let body = self.fetch_document(PRODUCTS_RESOURCE).await?;
        let document: ProductsDocument = serde_json::from_str(&body)?;
        Ok(parse_records(document.products, "product"))
    }

    async fn try_fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let body = self.fetch_document(CATEGORIES_RESOURCE).await?;
        let document: CategoriesDocument = serde_json::from_str(&body)?;
        Ok(parse_records(document.categories, "category"))
    }

    async fn fetch_document(&self, name: &str) -> Result<String, CatalogError> {
        match &self.source {
            ResourceSource::Directory(dir) => {
                let path = dir.join(name);
                debug!(path = %path.display(), "Reading resource");
                Ok(tokio::fs::read_to_string(path).await?)
            }
            ResourceSource::Url(base) => {
                let url = base
                    .join(name)
                    .map_err(|e| CatalogError::InvalidLocation(format!("{name}: {e}")))?;
                debug!(%url, "Fetching resource");
                let body = self
                    .client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                Ok(body)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use rust_decimal::Decimal;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::storage::MemoryStore;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_load_stored_products_missing_key() {
        let store = MemoryStore::new();
        assert!(load_stored_products(&store, "angryStoreProducts_v2").is_empty());
    }

    #[test]
    fn test_load_stored_products_malformed_json() {
        let store = MemoryStore::new();
        store.set_item("products", "[{\"name\": ").unwrap();
        assert!(load_stored_products(&store, "products").is_empty());

        store.set_item("products", r#"{"name":"not a list"}"#).unwrap();
        assert!(load_stored_products(&store, "products").is_empty());
    }

    #[test]
    fn test_load_stored_products_skips_invalid_records() {
        let store = MemoryStore::new();
        let records = json!([
            { "name": "Hoodie", "price": 450, "page": "men.html" },
            { "price": 10 },
            { "name": "Cap", "price": 120, "page": "men.html", "available": false }
        ]);
        store.set_item("products", &records.to_string()).unwrap();

        let products = load_stored_products(&store, "products");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Hoodie");
        assert_eq!(products[1].name, "Cap");
        assert!(!products[1].in_stock);
    }

    #[test]
    fn test_seed_then_load() {
        let store = MemoryStore::new();
        let mut hoodie = Product::new("Hoodie", Decimal::from(450));
        hoodie.page = Some("men.html".to_string());

        seed_products(&store, "products", std::slice::from_ref(&hoodie)).unwrap();
        assert_eq!(load_stored_products(&store, "products"), vec![hoodie]);
    }

    #[test]
    fn test_seed_stores_numeric_prices() {
        let store = MemoryStore::new();
        let products =
            parse_product_list(r#"[{"name":"Hoodie","price":450,"page":"men.html"}]"#).unwrap();
        seed_products(&store, "products", &products).unwrap();

        let raw: Value = serde_json::from_str(&store.get_item("products").unwrap().unwrap()).unwrap();
        assert!(raw[0]["price"].is_number());
        assert_eq!(raw[0]["price"].as_f64(), Some(450.0));
    }

    #[test]
    fn test_parse_product_list_shapes() {
        let bare = parse_product_list(r#"[{"name":"A","price":1},{"name":"B"}]"#).unwrap();
        assert_eq!(bare.len(), 1);

        let document = parse_product_list(r#"{"products":[{"name":"A","price":1}]}"#).unwrap();
        assert_eq!(document.len(), 1);

        assert!(parse_product_list(r#"{"items":[]}"#).is_err());
        assert!(parse_product_list("nope").is_err());
    }

    #[test]
    fn test_resource_source_parse() {
        assert_eq!(
            ResourceSource::parse("data").unwrap(),
            ResourceSource::Directory(PathBuf::from("data"))
        );

        let ResourceSource::Url(url) = ResourceSource::parse("https://cdn.example.com/data").unwrap()
        else {
            panic!("expected a URL source");
        };
        assert_eq!(url.as_str(), "https://cdn.example.com/data/");
        assert_eq!(
            url.join(PRODUCTS_RESOURCE).unwrap().as_str(),
            "https://cdn.example.com/data/products.json"
        );
    }

    #[test]
    fn test_resource_source_parse_invalid_url() {
        assert!(matches!(
            ResourceSource::parse("http://"),
            Err(CatalogError::InvalidLocation(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_catalog_from_directory() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            PRODUCTS_RESOURCE,
            &json!({ "products": [
                { "id": 1, "name": "Hoodie", "price": 450, "category": "Men" },
                { "id": 2, "name": "Dress", "price": "799.99", "category": "Women" }
            ]})
            .to_string(),
        );
        write(
            dir.path(),
            CATEGORIES_RESOURCE,
            &json!({ "categories": [{ "id": "men", "name": "Men" }] }).to_string(),
        );

        let fetcher = ResourceFetcher::new(ResourceSource::Directory(dir.path().to_path_buf()));
        let (products, categories) = fetcher.fetch_catalog().await;

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price, Decimal::new(79999, 2));
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Men");
    }

    #[tokio::test]
    async fn test_fetch_missing_resources_is_empty() {
        let dir = TempDir::new().unwrap();
        let fetcher = ResourceFetcher::new(ResourceSource::Directory(dir.path().to_path_buf()));

        let (products, categories) = fetcher.fetch_catalog().await;
        assert!(products.is_empty());
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), PRODUCTS_RESOURCE, r#"[{"name":"Hoodie","price":1}]"#);
        write(dir.path(), CATEGORIES_RESOURCE, "not json at all");

        let fetcher = ResourceFetcher::new(ResourceSource::Directory(dir.path().to_path_buf()));
        assert!(fetcher.fetch_products().await.is_empty());
        assert!(fetcher.fetch_categories().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_url_is_empty() {
        let source = ResourceSource::parse("http://127.0.0.1:9/data").unwrap();
        let fetcher = ResourceFetcher::new(source);
        assert!(fetcher.fetch_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_catalog_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shop/data/products.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [
                { "id": 7, "name": "Scarf", "price": 10, "oldPrice": 20 },
                { "name": "No price" }
            ]})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/shop/data/categories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "categories": [{ "id": "women", "name": "Women" }]
            })))
            .mount(&server)
            .await;

        let source = ResourceSource::parse(&format!("{}/shop/data", server.uri())).unwrap();
        let (products, categories) = ResourceFetcher::new(source).fetch_catalog().await;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Scarf");
        assert_eq!(products[0].old_price, Some(Decimal::from(20)));
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "women");
    }

    #[tokio::test]
    async fn test_fetch_http_error_status_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/products.json"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "products": [
                { "name": "Ghost", "price": 1 }
            ]})))
            .mount(&server)
            .await;

        let source = ResourceSource::parse(&format!("{}/data", server.uri())).unwrap();
        let fetcher = ResourceFetcher::new(source);

        assert!(fetcher.fetch_products().await.is_empty());
        // Unmatched requests get wiremock's default 404 as well
        assert!(fetcher.fetch_categories().await.is_empty());
    }
}
