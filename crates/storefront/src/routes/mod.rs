//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - About the elephants
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (?wood= filter)
//! GET  /products/{id}          - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout (simulated; no gateway behind it)
//! GET  /checkout               - Customer details + order summary
//! POST /checkout/pay           - Validate details, show static UPI QR payload
//! POST /checkout/complete      - "Payment done" confirmation: clears cart
//! GET  /thank-you              - Order confirmation page
//!
//! # Reviews
//! GET  /reviews                - Review listing + submission form
//! POST /reviews                - Form submission (redirects back)
//! GET  /api/reviews            - All reviews as JSON, newest first
//! POST /api/reviews            - Create a review (400 invalid / 201 created)
//! ```
//!
//! Every page accepts `?lang=en|ta` for bilingual rendering.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod pages;
pub mod products;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use urban_elephant_core::Language;

use crate::i18n::Labels;
use crate::state::AppState;

/// Query parameters shared by every page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

impl PageQuery {
    /// Resolve the requested language, defaulting to English.
    #[must_use]
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map_or(Language::En, Language::from_code)
    }
}

/// Per-request rendering context threaded through every page template.
pub struct PageContext {
    /// Label set for the requested language.
    pub labels: &'static Labels,
    /// Current language code, for building links.
    pub lang: &'static str,
    /// The other language's code, for the header toggle.
    pub lang_toggle: &'static str,
}

impl PageContext {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            labels: Labels::get(language),
            lang: language.as_code(),
            lang_toggle: language.toggled().as_code(),
        }
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/pay", post(checkout::pay))
        .route("/complete", post(checkout::complete))
}

/// Create the review routes router (page + JSON API).
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(reviews::index).post(reviews::create_form))
        .route(
            "/api/reviews",
            get(reviews::api_list).post(reviews::api_create),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/thank-you", get(checkout::thank_you))
        .merge(review_routes())
}
