//! Query the catalog resources and render catalog cards.

use std::path::PathBuf;

use angry_store_core::{Product, SortOrder};
use angry_store_storefront::loader::{ResourceFetcher, ResourceSource};
use angry_store_storefront::query::CatalogQuery;
use angry_store_storefront::{CatalogManager, StorefrontConfig};
use clap::Args;

use super::write_output;

/// Arguments for the `catalog` command.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only products in this category (`all` for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only products whose name, description, or tags contain this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (`price-low`, `price-high`, `name`, `rating`, `newest`)
    #[arg(long, default_value_t = SortOrder::Newest)]
    pub sort: SortOrder,

    /// Maximum number of products
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only featured products, in catalog order (default limit 6)
    #[arg(long, conflicts_with_all = ["category", "search", "id"])]
    pub featured: bool,

    /// Only the product with this id
    #[arg(long, conflicts_with_all = ["category", "search"])]
    pub id: Option<String>,

    /// Print the matching products as JSON instead of rendering cards
    #[arg(long)]
    pub json: bool,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl CatalogArgs {
    fn query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.clone(),
            search: self.search.clone(),
            sort: self.sort,
            limit: self.limit,
        }
    }
}

/// Select products from `manager` according to `args`.
fn select(manager: &mut CatalogManager, args: &CatalogArgs) -> Vec<Product> {
    if let Some(id) = &args.id {
        return manager.product_by_id(id).cloned().into_iter().collect();
    }
    if args.featured {
        return manager.featured_products(args.limit);
    }
    manager.query(&args.query())
}

/// Run the `catalog` command.
///
/// # Errors
///
/// Returns an error if the resource base is invalid, rendering fails, or the
/// output cannot be written. Unreachable resources are not an error; they
/// render as an empty catalog.
pub async fn run(
    config: &StorefrontConfig,
    args: &CatalogArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = ResourceSource::parse(&config.resource_base)?;
    let fetcher = ResourceFetcher::new(source);
    let mut manager = CatalogManager::load(&fetcher).await;

    let products = select(&mut manager, args);
    tracing::info!(
        count = products.len(),
        filter = manager.current_filter(),
        "Selected products"
    );

    let output = if args.json {
        serde_json::to_string_pretty(&products)?
    } else {
        manager.render(&products, &config.render_options())?
    };

    write_output(args.out.as_deref(), &output).await?;
    Ok(())
}
