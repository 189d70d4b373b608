//! Cart management commands.

use std::io::Write;

use angry_store_core::CartEntry;
use angry_store_storefront::cart::{add_to_cart, load_cart};
use angry_store_storefront::{FileStore, StorefrontConfig};
use rust_decimal::Decimal;

use super::write_output;

/// Append an entry to the stored cart and print the confirmation.
///
/// # Errors
///
/// Returns an error if the cart cannot be written.
pub fn add(
    config: &StorefrontConfig,
    name: String,
    price: Decimal,
    image: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::new(&config.storage_dir);
    let confirmation = add_to_cart(
        &store,
        &config.cart_key,
        CartEntry::new(name, price, image),
        config.currency,
    )?;

    writeln!(std::io::stdout().lock(), "{confirmation}")?;
    Ok(())
}

/// Print the stored cart as JSON.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub async fn list(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::new(&config.storage_dir);
    let cart = load_cart(&store, &config.cart_key);
    write_output(None, &serde_json::to_string_pretty(&cart)?).await?;
    Ok(())
}
