//! Customer reviews: an HTML page plus a small JSON API.
//!
//! The page and the API share the same validation and repository; the API
//! mirrors the page so the review widget can be embedded elsewhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tracing::instrument;

use crate::db::ReviewRepository;
use crate::error::Result;
use crate::filters;
use crate::models::review::{NewReview, Review};
use crate::state::AppState;

use super::{PageContext, PageQuery};

/// Review display data for templates.
pub struct ReviewView {
    pub name: String,
    /// Five characters, filled and hollow stars.
    pub stars: String,
    pub comment: String,
    pub product: Option<String>,
    pub verified: bool,
    pub date: String,
}

impl ReviewView {
    #[must_use]
    pub fn new(review: &Review) -> Self {
        let rating = usize::try_from(review.rating.clamp(0, 5)).unwrap_or(0);
        let mut stars = "★".repeat(rating);
        stars.push_str(&"☆".repeat(5 - rating));

        Self {
            name: review.name.clone(),
            stars,
            comment: review.comment.clone(),
            product: review.product.clone(),
            verified: review.verified,
            date: review.created_at.format("%d %b %Y").to_string(),
        }
    }
}

/// Reviews page template.
#[derive(Template, WebTemplate)]
#[template(path = "reviews/index.html")]
pub struct ReviewsIndexTemplate {
    pub ctx: PageContext,
    pub reviews: Vec<ReviewView>,
    pub error: Option<String>,
}

/// Reviews page with the submission form.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<ReviewsIndexTemplate> {
    let reviews = ReviewRepository::new(state.pool()).list().await?;

    Ok(ReviewsIndexTemplate {
        ctx: PageContext::new(query.language()),
        reviews: reviews.iter().map(ReviewView::new).collect(),
        error: None,
    })
}

/// Review form submission from the page.
///
/// On validation failure the page is re-rendered with the message; on
/// success the browser is redirected back so a refresh does not resubmit.
#[instrument(skip(state, form))]
pub async fn create_form(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Form(form): Form<NewReview>,
) -> Result<Response> {
    if let Err(err) = form.validate() {
        let reviews = ReviewRepository::new(state.pool()).list().await?;
        return Ok(ReviewsIndexTemplate {
            ctx: PageContext::new(query.language()),
            reviews: reviews.iter().map(ReviewView::new).collect(),
            error: Some(err.to_string()),
        }
        .into_response());
    }

    ReviewRepository::new(state.pool()).create(&form).await?;

    let target = match query.lang.as_deref() {
        Some("ta") => "/reviews?lang=ta",
        _ => "/reviews",
    };
    Ok(Redirect::to(target).into_response())
}

/// All reviews as JSON, newest first.
#[instrument(skip(state))]
pub async fn api_list(State(state): State<AppState>) -> Result<Response> {
    let reviews = ReviewRepository::new(state.pool()).list().await?;
    Ok(Json(json!({ "reviews": reviews })).into_response())
}

/// Create a review through the JSON API.
///
/// Responds 400 with `{"error": ...}` on invalid input and 201 with
/// `{"review": ...}` on success.
#[instrument(skip(state, review))]
pub async fn api_create(
    State(state): State<AppState>,
    Json(review): Json<NewReview>,
) -> Result<Response> {
    if let Err(err) = review.validate() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response());
    }

    let created = ReviewRepository::new(state.pool()).create(&review).await?;
    Ok((StatusCode::CREATED, Json(json!({ "review": created }))).into_response())
}
