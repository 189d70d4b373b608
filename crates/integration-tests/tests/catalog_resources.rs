//! Integration tests for the catalog manager over JSON resources.

#![allow(clippy::unwrap_used)]

use angry_store_core::SortOrder;
use angry_store_integration_tests::{catalog_categories, catalog_products, write_json, write_text};
use angry_store_storefront::CatalogManager;
use angry_store_storefront::loader::{
    CATEGORIES_RESOURCE, PRODUCTS_RESOURCE, ResourceFetcher, ResourceSource,
};
use angry_store_storefront::query::CatalogQuery;
use angry_store_storefront::render::RenderOptions;
use tempfile::TempDir;

fn ids(products: &[angry_store_core::Product]) -> Vec<i32> {
    products
        .iter()
        .filter_map(|p| p.id)
        .map(|id| id.as_i32())
        .collect()
}

async fn load(dir: &TempDir) -> CatalogManager {
    let source = ResourceSource::parse(dir.path().to_str().unwrap()).unwrap();
    CatalogManager::load(&ResourceFetcher::new(source)).await
}

fn resource_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), PRODUCTS_RESOURCE, &catalog_products());
    write_json(dir.path(), CATEGORIES_RESOURCE, &catalog_categories());
    dir
}

#[tokio::test]
async fn test_load_skips_invalid_records() {
    let dir = resource_dir();
    let manager = load(&dir).await;

    assert_eq!(ids(manager.products()), vec![1, 2, 3]);
    assert_eq!(manager.categories().len(), 2);
    assert_eq!(manager.current_filter(), "all");
}

#[tokio::test]
async fn test_missing_categories_keep_products() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), PRODUCTS_RESOURCE, &catalog_products());

    let manager = load(&dir).await;
    assert_eq!(manager.products().len(), 3);
    assert!(manager.categories().is_empty());
}

#[tokio::test]
async fn test_malformed_resources_give_empty_catalog() {
    let dir = TempDir::new().unwrap();
    write_text(dir.path(), PRODUCTS_RESOURCE, "<html>404</html>");
    write_text(dir.path(), CATEGORIES_RESOURCE, "");

    let manager = load(&dir).await;
    assert!(manager.products().is_empty());
    assert!(manager.categories().is_empty());

    let html = manager
        .render(manager.products(), &RenderOptions::default())
        .unwrap();
    assert_eq!(html.matches("no-products").count(), 1);
}

#[tokio::test]
async fn test_query_operations() {
    let dir = resource_dir();
    let mut manager = load(&dir).await;

    assert_eq!(ids(&manager.filter_by_category("MEN")), vec![1, 3]);
    assert_eq!(manager.current_filter(), "MEN");
    assert_eq!(manager.filter_by_category("all"), manager.products());

    assert_eq!(ids(&manager.search("waterproof")), vec![1]);
    assert_eq!(ids(&manager.search("OUTDOOR")), vec![1]);

    let cheapest = CatalogManager::sort_products(manager.products(), SortOrder::PriceLow);
    assert_eq!(ids(&cheapest), vec![2, 3, 1]);
    let priciest = CatalogManager::sort_products(manager.products(), SortOrder::PriceHigh);
    assert_eq!(ids(&priciest), vec![1, 3, 2]);
    let rated = CatalogManager::sort_products(manager.products(), SortOrder::Rating);
    assert_eq!(ids(&rated), vec![2, 1, 3]);

    assert_eq!(ids(&manager.featured_products(Some(2))), vec![2, 3]);
    assert_eq!(ids(&manager.featured_products(Some(1))), vec![2]);

    assert_eq!(
        manager.product_by_id("2").map(|p| p.name.as_str()),
        Some("Silk Scarf")
    );
}

#[tokio::test]
async fn test_render_catalog_cards() {
    let dir = resource_dir();
    let mut manager = load(&dir).await;

    let products = manager.query(&CatalogQuery {
        sort: SortOrder::PriceLow,
        ..CatalogQuery::default()
    });
    let html = manager
        .render(&products, &RenderOptions::default())
        .unwrap();

    assert_eq!(html.matches("class=\"product-card").count(), 3);
    // Scarf: 20 -> 10 is 50% off; only two of its three features are shown
    assert!(html.contains("-50%"));
    assert!(html.contains("<del class=\"old-price\">20 EGP</del>"));
    assert!(html.contains("<li>Hand made</li>"));
    assert!(!html.contains("Gift box"));
    assert!(html.contains("href=\"product.html?id=2\""));
    assert!(html.contains("href=\"product.html?id=1\""));
    assert!(html.contains("<p class=\"product-platform\">Trail</p>"));
    assert!(html.contains("data-category=\"Women\""));
    // Belt is out of stock, so it gets no detail link
    assert!(!html.contains("product.html?id=3"));
    assert_eq!(html.matches("unavailable-btn").count(), 1);
}
