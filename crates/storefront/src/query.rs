//! Pure query operations over an in-memory product list.
//!
//! Every function takes a slice and returns a new list; none of them reorder
//! or modify their input.

use std::cmp::Ordering;

use angry_store_core::{Product, ProductId, SortOrder};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Number of products returned by [`featured_products`] when no limit is given.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Products whose category equals `category`, ignoring case.
///
/// Exactly [`ALL_CATEGORIES`] returns the full list unchanged; the sentinel
/// itself is case-sensitive, so `"ALL"` is treated as a category name.
#[must_use]
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    if is_all_categories(category) {
        return products.to_vec();
    }
    let wanted = category.to_lowercase();
    products
        .iter()
        .filter(|p| p.category.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Whether `category` is the "no filter" sentinel.
#[must_use]
pub fn is_all_categories(category: &str) -> bool {
    category == ALL_CATEGORIES
}

/// Products whose name, description, or any tag contains `query`, ignoring case.
///
/// The query is lowercased but not trimmed: surrounding spaces are part of
/// the needle. An empty query matches everything.
#[must_use]
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.matches_text(&needle))
        .cloned()
        .collect()
}

/// A sorted copy of `products`.
///
/// The sort is stable; ties keep their input order.
#[must_use]
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Name => sorted.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortOrder::Rating => sorted.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        }),
        SortOrder::Newest => sorted.sort_by(|a, b| newest_first(a.id, b.id)),
    }
    sorted
}

fn newest_first(a: Option<ProductId>, b: Option<ProductId>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Featured products in catalog order, at most `limit` of them.
#[must_use]
pub fn featured_products(products: &[Product], limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.featured)
        .take(limit)
        .cloned()
        .collect()
}

/// The first product whose id equals the leading integer of `id`.
#[must_use]
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    let id = ProductId::parse_leading(id)?;
    products.iter().find(|p| p.id == Some(id))
}

/// A combined listing query: category, then search, then sort, then limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl CatalogQuery {
    /// Run the query against `products`.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result = match self.category.as_deref() {
            Some(category) => filter_by_category(products, category),
            None => products.to_vec(),
        };
        if let Some(query) = self.search.as_deref() {
            result = search(&result, query);
        }
        let mut result = sort_products(&result, self.sort);
        if let Some(limit) = self.limit {
            result.truncate(limit);
        }
        result
    }
}
