//! Product card rendering.
//!
//! Cards are rendered through Askama templates, which HTML-escape every
//! catalog value. The resulting fragment replaces the content of the page's
//! product container wholesale (see [`mount`]).

mod mount;

pub use mount::mount;

use angry_store_core::{CurrencyCode, Price, Product, ProductId};
use askama::Template;

use crate::config::{DEFAULT_DETAIL_PAGE, DEFAULT_PLACEHOLDER_IMAGE};
use crate::error::RenderError;

/// Maximum number of tag badges on a card.
pub const MAX_TAGS: usize = 3;
/// Maximum number of feature badges on a catalog card.
pub const MAX_FEATURES: usize = 2;

/// Which card layout to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Storefront page card: availability overlay and add-to-cart button.
    Storefront,
    /// Catalog card: discount badge, platform line, feature badges, and a
    /// detail link.
    Catalog,
}

/// Settings shared by every card in a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Image shown when a product image fails to load.
    pub placeholder_image: String,
    /// Page that shows a single product, linked as `<detail_page>?id=<id>`.
    pub detail_page: String,
    /// Currency used to display prices.
    pub currency: CurrencyCode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            currency: CurrencyCode::default(),
        }
    }
}

/// Product card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: Option<ProductId>,
    pub name: String,
    pub category: String,
    /// Category exposed as `data-category` for client-side filtering.
    pub category_attr: Option<String>,
    pub platform: Option<String>,
    pub image: String,
    pub placeholder_image: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub price: String,
    /// Raw amount for the add-to-cart button's data attribute.
    pub price_amount: String,
    pub old_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub in_stock: bool,
    pub action: CardAction,
}

/// Call to action at the bottom of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    AddToCart,
    Details { href: String },
    OutOfStock,
}

impl ProductCardView {
    /// Build the view of `product` for the given card style.
    #[must_use]
    pub fn new(product: &Product, style: CardStyle, options: &RenderOptions) -> Self {
        let price = Price::new(product.price, options.currency);
        let discount_percent = product.discount_percent();
        let old_price = discount_percent
            .and(product.old_price)
            .map(|old| Price::new(old, options.currency).to_string());

        let action = match (style, product.in_stock, product.id) {
            (_, false, _) => CardAction::OutOfStock,
            (CardStyle::Catalog, true, Some(id)) => CardAction::Details {
                href: format!("{}?id={id}", options.detail_page),
            },
            _ => CardAction::AddToCart,
        };

        let (features, platform, category_attr) = match style {
            CardStyle::Catalog => (
                product.features.iter().take(MAX_FEATURES).cloned().collect(),
                product.platform.clone().filter(|p| !p.is_empty()),
                Some(product.category.clone()),
            ),
            CardStyle::Storefront => (Vec::new(), None, None),
        };

        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            category_attr,
            platform,
            image: product.image.clone(),
            placeholder_image: options.placeholder_image.clone(),
            tags: product.tags.iter().take(MAX_TAGS).cloned().collect(),
            features,
            price: price.to_string(),
            price_amount: price.amount_display(),
            old_price,
            discount_percent,
            in_stock: product.in_stock,
            action,
        }
    }

    /// Detail link, when the card links to a detail page.
    #[must_use]
    pub fn detail_href(&self) -> Option<&str> {
        match &self.action {
            CardAction::Details { href } => Some(href),
            _ => None,
        }
    }

    /// Whether the card shows an add-to-cart button.
    #[must_use]
    pub fn can_add_to_cart(&self) -> bool {
        self.action == CardAction::AddToCart
    }
}

/// Product grid fragment template.
#[derive(Template)]
#[template(path = "catalog/grid.html")]
pub struct ProductGridTemplate {
    pub cards: Vec<ProductCardView>,
}

/// Minimal page shell with an empty product container.
#[derive(Template)]
#[template(path = "storefront/shell.html")]
pub struct ShellTemplate<'a> {
    pub title: &'a str,
    pub container_id: &'a str,
}

/// Render the card grid for `products`.
///
/// An empty list renders a single "no products" placeholder.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_cards(
    products: &[Product],
    style: CardStyle,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let cards = products
        .iter()
        .map(|p| ProductCardView::new(p, style, options))
        .collect();
    Ok(ProductGridTemplate { cards }.render()?)
}

/// Render an HTML document whose only content is an empty product container.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_shell(title: &str, container_id: &str) -> Result<String, RenderError> {
    Ok(ShellTemplate {
        title,
        container_id,
    }
    .render()?)
}
