//! Render a storefront page from the stored product list.

use std::path::Path;

use angry_store_storefront::page::render_storefront_page;
use angry_store_storefront::{FileStore, StorefrontConfig};

use super::write_output;

/// Render the page at `location`, optionally into an existing document.
///
/// # Errors
///
/// Returns an error if the document cannot be read, the page could not be
/// rendered (for example the document has no product container), or the
/// output cannot be written.
pub async fn render(
    config: &StorefrontConfig,
    location: &str,
    document: Option<&Path>,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = match document {
        Some(path) => Some(tokio::fs::read_to_string(path).await?),
        None => None,
    };

    let store = FileStore::new(&config.storage_dir);
    let html = render_storefront_page(&store, config, location, document.as_deref())
        .ok_or_else(|| format!("page {location} was not rendered"))?;

    write_output(out, &html).await?;
    Ok(())
}
