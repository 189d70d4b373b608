//! Angry Store Storefront library.
//!
//! Loads the product catalog, queries it, and renders product cards into a
//! page's product container.
//!
//! # Pipelines
//!
//! - **Storefront pages** ([`page`]): the page-tagged product list is read
//!   from key-value storage, filtered to the current page, and rendered as
//!   cards with an add-to-cart action.
//! - **Catalog** ([`manager`]): `products.json` and `categories.json` are
//!   fetched from a directory or URL and exposed through filter, search,
//!   sort, featured, and lookup operations.
//!
//! Both pipelines share the [`angry_store_core::Product`] schema. Loading
//! never fails outward: broken data renders as an empty catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod loader;
pub mod manager;
pub mod page;
pub mod query;
pub mod render;
pub mod storage;

pub use config::StorefrontConfig;
pub use error::{CatalogError, RenderError};
pub use manager::CatalogManager;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
