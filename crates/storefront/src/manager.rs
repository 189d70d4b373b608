//! Catalog manager over the fetched product and category lists.
//!
//! A [`CatalogManager`] is an ordinary value: build it from lists you already
//! have with [`CatalogManager::new`], or fetch them with
//! [`CatalogManager::load`]. It remembers the last category filter applied;
//! every other operation leaves it untouched.

use angry_store_core::{Category, Product, SortOrder};

use crate::error::RenderError;
use crate::loader::ResourceFetcher;
use crate::query::{self, ALL_CATEGORIES, CatalogQuery, DEFAULT_FEATURED_LIMIT};
use crate::render::{CardStyle, RenderOptions, render_cards};

/// In-memory catalog with query and render operations.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogManager {
    products: Vec<Product>,
    categories: Vec<Category>,
    current_filter: String,
}

impl CatalogManager {
    /// Create a manager over already-loaded lists.
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            current_filter: ALL_CATEGORIES.to_string(),
        }
    }

    /// Fetch products and categories and build a manager over them.
    ///
    /// Fetch failures leave the corresponding list empty.
    pub async fn load(fetcher: &ResourceFetcher) -> Self {
        let (products, categories) = fetcher.fetch_catalog().await;
        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "Catalog loaded"
        );
        Self::new(products, categories)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The last category passed to [`Self::filter_by_category`].
    #[must_use]
    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    /// Products in `category` (ignoring case), or all of them for `"all"`.
    ///
    /// Records `category` as the current filter.
    pub fn filter_by_category(&mut self, category: &str) -> Vec<Product> {
        self.current_filter = category.to_string();
        query::filter_by_category(&self.products, category)
    }

    /// Products whose name, description, or tags contain `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        query::search(&self.products, query)
    }

    /// A sorted copy of `products`.
    #[must_use]
    pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
        query::sort_products(products, order)
    }

    /// Featured products in catalog order, at most `limit` (default 6).
    #[must_use]
    pub fn featured_products(&self, limit: Option<usize>) -> Vec<Product> {
        query::featured_products(&self.products, limit.unwrap_or(DEFAULT_FEATURED_LIMIT))
    }

    /// The product whose id matches the leading integer of `id`.
    #[must_use]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        query::find_by_id(&self.products, id)
    }

    /// Run a combined listing query.
    ///
    /// A category in the query is recorded as the current filter.
    pub fn query(&mut self, query: &CatalogQuery) -> Vec<Product> {
        if let Some(category) = &query.category {
            self.current_filter.clone_from(category);
        }
        query.apply(&self.products)
    }

    /// Render catalog cards for `products`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(
        &self,
        products: &[Product],
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        render_cards(products, CardStyle::Catalog, options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use angry_store_core::ProductId;
    use rust_decimal::Decimal;

    use super::*;

    fn manager() -> CatalogManager {
        let make = |id: i32, price: i64, featured: bool, category: &str| {
            let mut p = Product::new(format!("Product {id}"), Decimal::from(price));
            p.id = Some(ProductId::new(id));
            p.featured = featured;
            p.category = category.to_string();
            p
        };
        CatalogManager::new(
            vec![
                make(1, 50, false, "Men"),
                make(2, 10, true, "Women"),
                make(3, 30, true, "Men"),
            ],
            vec![Category {
                id: "men".to_string(),
                name: "Men".to_string(),
                icon: None,
                description: None,
            }],
        )
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().filter_map(|p| p.id).map(|id| id.as_i32()).collect()
    }

    #[test]
    fn test_initial_filter_is_all() {
        assert_eq!(manager().current_filter(), "all");
    }

    #[test]
    fn test_filter_by_category_records_filter() {
        let mut manager = manager();

        let men = manager.filter_by_category("men");
        assert_eq!(ids(&men), vec![1, 3]);
        assert_eq!(manager.current_filter(), "men");

        let all = manager.filter_by_category("all");
        assert_eq!(all, manager.products());
        assert_eq!(manager.current_filter(), "all");
    }

    #[test]
    fn test_other_operations_leave_filter_alone() {
        let mut manager = manager();
        manager.filter_by_category("women");

        let _ = manager.search("product");
        let _ = manager.featured_products(None);
        let _ = manager.product_by_id("1");
        assert_eq!(manager.current_filter(), "women");
    }

    #[test]
    fn test_sort_and_featured_example() {
        let manager = manager();
        let sorted = CatalogManager::sort_products(manager.products(), SortOrder::PriceLow);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);

        assert_eq!(ids(&manager.featured_products(Some(1))), vec![2]);
        assert_eq!(ids(&manager.featured_products(None)), vec![2, 3]);
    }

    #[test]
    fn test_product_by_id() {
        let manager = manager();
        assert_eq!(
            manager.product_by_id("3").map(|p| p.name.as_str()),
            Some("Product 3")
        );
        assert!(manager.product_by_id("x").is_none());
    }

    #[test]
    fn test_query_records_category() {
        let mut manager = manager();
        let result = manager.query(&CatalogQuery {
            category: Some("Men".to_string()),
            sort: SortOrder::PriceLow,
            ..CatalogQuery::default()
        });
        assert_eq!(ids(&result), vec![3, 1]);
        assert_eq!(manager.current_filter(), "Men");
    }

    #[test]
    fn test_render_uses_catalog_cards() {
        let manager = manager();
        let html = manager
            .render(manager.products(), &RenderOptions::default())
            .unwrap();
        assert_eq!(html.matches("details-btn").count(), 3);

        let html = manager.render(&[], &RenderOptions::default()).unwrap();
        assert!(html.contains("no-products"));
    }
}
