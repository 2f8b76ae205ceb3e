//! Static informational pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use tracing::instrument;

use crate::filters;

use super::{PageContext, PageQuery};

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
}

/// About page: the elephants and the workshop.
#[instrument]
pub async fn about(Query(query): Query<PageQuery>) -> AboutTemplate {
    AboutTemplate {
        ctx: PageContext::new(query.language()),
    }
}
