//! Home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

use super::products::ProductCard;
use super::{PageContext, PageQuery};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub featured: Vec<ProductCard>,
}

/// Home page with a few featured statues.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HomeTemplate {
    let language = query.language();

    let featured = state
        .catalog()
        .all()
        .iter()
        .filter(|product| product.in_stock)
        .take(4)
        .map(|product| ProductCard::new(product, language))
        .collect();

    HomeTemplate {
        ctx: PageContext::new(language),
        featured,
    }
}
