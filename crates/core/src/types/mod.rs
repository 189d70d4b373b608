//! Core types for Angry Store.
//!
//! This module provides type-safe wrappers for the catalog domain.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;
pub mod sort;

pub use cart::CartEntry;
pub use id::*;
pub use price::{CurrencyCode, Price, discount_percent};
pub use product::{Category, Product};
pub use sort::SortOrder;
