//! Angry Store Core - Shared types library.
//!
//! This crate provides the catalog types used by every Angry Store component:
//! - `storefront` - Catalog loading, querying, and card rendering
//! - `cli` - Command-line tools for rendering pages and managing storage
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage
//! access, no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, categories, cart entries, prices, IDs, and sort orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
