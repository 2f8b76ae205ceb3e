//! Product listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use urban_elephant_core::{Language, Product, ProductId, WoodType};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

use super::{PageContext, PageQuery};

/// Product card display data for listing templates.
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub wood: &'static str,
    pub size: String,
    pub weight: u32,
    pub price: String,
    pub image: Option<String>,
    pub in_stock: bool,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, language: Language) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.localized_name(language).to_string(),
            wood: product.wood_type.label(language),
            size: product.size_in_feet.to_string(),
            weight: product.weight_in_kg,
            price: product.base_price.to_string(),
            image: product.primary_image().map(String::from),
            in_stock: product.in_stock,
        }
    }
}

/// Product detail display data, including the cost breakdown.
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub wood: &'static str,
    pub size: String,
    pub weight: u32,
    pub price: String,
    pub cost: String,
    pub gst: String,
    pub packing: String,
    pub freight: String,
    pub image: Option<String>,
    pub in_stock: bool,
}

impl ProductDetail {
    #[must_use]
    pub fn new(product: &Product, language: Language) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.localized_name(language).to_string(),
            description: product.localized_description(language).to_string(),
            wood: product.wood_type.label(language),
            size: product.size_in_feet.to_string(),
            weight: product.weight_in_kg,
            price: product.base_price.to_string(),
            cost: product.breakdown.cost.to_string(),
            gst: product.breakdown.gst.to_string(),
            packing: product.breakdown.packing.to_string(),
            freight: product.breakdown.freight.to_string(),
            image: product.primary_image().map(String::from),
            in_stock: product.in_stock,
        }
    }
}

/// Listing page query: language plus an optional wood-type filter.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub lang: Option<String>,
    pub wood: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub ctx: PageContext,
    pub products: Vec<ProductCard>,
    pub wood_filter: Option<&'static str>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub ctx: PageContext,
    pub product: ProductDetail,
}

/// Product listing, optionally filtered by wood type.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> ProductsIndexTemplate {
    let language = query
        .lang
        .as_deref()
        .map_or(Language::En, Language::from_code);
    let wood_filter = query.wood.as_deref().and_then(WoodType::parse);

    let products = match wood_filter {
        Some(wood) => state
            .catalog()
            .by_wood_type(wood)
            .into_iter()
            .map(|product| ProductCard::new(product, language))
            .collect(),
        None => state
            .catalog()
            .all()
            .iter()
            .map(|product| ProductCard::new(product, language))
            .collect(),
    };

    ProductsIndexTemplate {
        ctx: PageContext::new(language),
        products,
        wood_filter: wood_filter.map(|wood| wood.as_str()),
    }
}

/// Product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<ProductShowTemplate> {
    let language = query.language();
    let product_id = ProductId::new(id);

    let product = state
        .catalog()
        .get(&product_id)
        .ok_or_else(|| AppError::NotFound(product_id.to_string()))?;

    Ok(ProductShowTemplate {
        ctx: PageContext::new(language),
        product: ProductDetail::new(product, language),
    })
}
