//! Seed key-value storage with a product list.
//!
//! This command reads products from a JSON file, validates each record, and
//! replaces the page-tagged product list that storefront pages render from.

use std::path::Path;

use angry_store_storefront::loader::{parse_product_list, seed_products};
use angry_store_storefront::{FileStore, StorefrontConfig};
use tracing::{info, warn};

/// Replace the stored product list with the products in `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or storage cannot
/// be written.
pub async fn products(
    config: &StorefrontConfig,
    file_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file_path.exists() {
        return Err(format!("File not found: {}", file_path.display()).into());
    }

    info!(path = %file_path.display(), "Loading products from file");
    let content = tokio::fs::read_to_string(file_path).await?;
    let products = parse_product_list(&content)?;

    let untagged = products.iter().filter(|p| p.page.is_none()).count();
    if untagged > 0 {
        warn!(untagged, "Some products have no page and will not appear on any storefront page");
    }

    let store = FileStore::new(&config.storage_dir);
    seed_products(&store, &config.products_key, &products)?;

    info!(
        count = products.len(),
        key = %config.products_key,
        dir = %config.storage_dir.display(),
        "Seeded products"
    );
    Ok(())
}
