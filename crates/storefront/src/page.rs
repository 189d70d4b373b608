//! Page-scoped storefront rendering.
//!
//! Every storefront page (`index.html`, `men.html`, ...) lists the stored
//! products tagged with its own file name. The page name comes from the last
//! segment of the current location.

use angry_store_core::Product;
use tracing::instrument;
use url::Url;

use crate::config::StorefrontConfig;
use crate::loader::load_stored_products;
use crate::render::{CardStyle, mount, render_cards, render_shell};
use crate::storage::KeyValueStore;

/// Name of the page a location points at.
///
/// Accepts full URLs or bare paths; query strings and fragments are ignored.
/// A location ending in `/` (or empty) maps to `home_page`.
#[must_use]
pub fn current_page(location: &str, home_page: &str) -> String {
    let path = match Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => home_page.to_string(),
    }
}

/// Keep the products listed on `page`, in their stored order.
#[must_use]
pub fn filter_by_page(products: Vec<Product>, page: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.page.as_deref() == Some(page))
        .collect()
}

/// Load the stored catalog and keep the products for the page at `location`.
#[must_use]
pub fn load_page_products(
    store: &dyn KeyValueStore,
    key: &str,
    location: &str,
    home_page: &str,
) -> Vec<Product> {
    let page = current_page(location, home_page);
    let products = filter_by_page(load_stored_products(store, key), &page);
    tracing::debug!(%page, count = products.len(), "Loaded page products");
    products
}

/// Render the storefront page at `location` into `document`.
///
/// When no document is given a minimal shell with an empty container is used.
/// Returns the document with its product container replaced, or `None` if
/// the document has no usable container or rendering fails; both cases are
/// logged.
#[instrument(skip(store, config, document))]
pub fn render_storefront_page(
    store: &dyn KeyValueStore,
    config: &StorefrontConfig,
    location: &str,
    document: Option<&str>,
) -> Option<String> {
    let products = load_page_products(store, &config.products_key, location, &config.home_page);

    let shell;
    let document = match document {
        Some(document) => document,
        None => {
            let title = current_page(location, &config.home_page);
            shell = match render_shell(&title, &config.container_id) {
                Ok(shell) => shell,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to render page shell");
                    return None;
                }
            };
            &shell
        }
    };

    let result = render_cards(&products, CardStyle::Storefront, &config.render_options())
        .and_then(|fragment| mount(document, &config.container_id, &fragment));
    match result {
        Ok(html) => Some(html),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render storefront page");
            None
        }
    }
}
