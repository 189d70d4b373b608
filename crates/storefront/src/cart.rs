//! Cart persistence.
//!
//! The cart is a JSON list of [`CartEntry`] values under a fixed storage key.
//! Adding appends one entry; nothing is merged or deduplicated. Entries that
//! fail validation are dropped one by one so the valid ones survive the next
//! write.

use std::fmt;

use angry_store_core::{CartEntry, CurrencyCode, Price, Product};
use serde_json::Value;
use tracing::instrument;

use crate::error::CatalogError;
use crate::loader::parse_records;
use crate::storage::{KeyValueStore, StorageError, read_json, write_json};

/// Confirmation shown after an entry was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfirmation {
    pub name: String,
    pub price: Price,
    /// Number of entries in the cart after the append.
    pub cart_size: usize,
}

impl fmt::Display for CartConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added \"{}\" to the cart! Price: {}", self.name, self.price)
    }
}

/// Read the cart stored under `key`.
///
/// A missing or unreadable cart is treated as empty; failures are logged.
#[instrument(skip(store))]
pub fn load_cart(store: &dyn KeyValueStore, key: &str) -> Vec<CartEntry> {
    match read_cart(store, key) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read cart");
            Vec::new()
        }
    }
}

/// Valid entries of the stored cart.
///
/// A value that is not a JSON list counts as an empty cart. Backend failures
/// are returned so a cart that could not be read is never overwritten.
fn read_cart(store: &dyn KeyValueStore, key: &str) -> Result<Vec<CartEntry>, CatalogError> {
    match read_json::<Vec<Value>>(store, key) {
        Ok(records) => Ok(parse_records(records.unwrap_or_default(), "cart entry")),
        Err(e @ StorageError::Json { .. }) => {
            tracing::warn!(error = %e, "Discarding malformed cart");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Append `entry` to the cart stored under `key`.
///
/// # Errors
///
/// Returns an error if the stored cart cannot be read or the updated cart
/// cannot be written.
#[instrument(skip(store, entry), fields(name = %entry.name))]
pub fn add_to_cart(
    store: &dyn KeyValueStore,
    key: &str,
    entry: CartEntry,
    currency: CurrencyCode,
) -> Result<CartConfirmation, CatalogError> {
    let mut cart = read_cart(store, key)?;
    let confirmation_name = entry.name.clone();
    let price = Price::new(entry.price, currency);
    cart.push(entry);
    write_json(store, key, &cart)?;

    let confirmation = CartConfirmation {
        name: confirmation_name,
        price,
        cart_size: cart.len(),
    };
    tracing::info!(cart_size = confirmation.cart_size, "{confirmation}");
    Ok(confirmation)
}

/// Append `product` to the cart with a quantity of one.
///
/// # Errors
///
/// Same as [`add_to_cart`].
pub fn add_product_to_cart(
    store: &dyn KeyValueStore,
    key: &str,
    product: &Product,
    currency: CurrencyCode,
) -> Result<CartConfirmation, CatalogError> {
    add_to_cart(store, key, CartEntry::from(product), currency)
}
