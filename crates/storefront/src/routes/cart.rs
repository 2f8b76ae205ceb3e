//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Each handler opens the visitor's cart from the session, applies one
//! mutation, and flushes the snapshot back; the fragments it returns are
//! rendered from the in-memory cart, so a failed session write never shows
//! the visitor stale state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use urban_elephant_core::{Language, ProductId, Rupees};

use crate::cart::{CartState, CartStore, SessionStorage};
use crate::filters;
use crate::state::AppState;

use super::checkout::shipping_for;
use super::{PageContext, PageQuery};

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<String>,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub subtotal: String,
    pub shipping: String,
    pub shipping_free: bool,
    pub grand_total: String,
}

impl CartView {
    /// Build display data from a cart snapshot.
    #[must_use]
    pub fn new(state: &CartState, language: Language) -> Self {
        let subtotal = state.total_price();
        let shipping = shipping_for(subtotal);

        Self {
            items: state
                .items
                .iter()
                .map(|item| CartItemView {
                    id: item.product.id.to_string(),
                    name: item.product.localized_name(language).to_string(),
                    quantity: item.quantity,
                    price: item.product.base_price.to_string(),
                    line_price: item.line_price().to_string(),
                    image: item.product.primary_image().map(String::from),
                })
                .collect(),
            item_count: state.total_items(),
            subtotal: subtotal.to_string(),
            shipping: shipping.to_string(),
            shipping_free: shipping == Rupees::ZERO,
            grand_total: (subtotal + shipping).to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<i64>,
    pub lang: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
    pub lang: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
    pub lang: Option<String>,
}

/// Clear cart form data.
#[derive(Debug, Deserialize)]
pub struct ClearCartForm {
    pub lang: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub ctx: PageContext,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub ctx: PageContext,
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

fn form_language(lang: Option<&str>) -> Language {
    lang.map_or(Language::En, Language::from_code)
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(
    Query(query): Query<PageQuery>,
    session: Session,
) -> impl IntoResponse {
    let language = query.language();
    let cart = CartStore::open(SessionStorage::read(&session).await);

    CartShowTemplate {
        ctx: PageContext::new(language),
        cart: CartView::new(cart.state(), language),
    }
}

/// Add item to cart (HTMX).
///
/// Returns the cart count badge with an HTMX trigger so other fragments
/// refresh. A non-positive quantity is rejected with a user-facing message;
/// the cart is left untouched.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product_id = ProductId::new(form.product_id);
    let Some(product) = state.catalog().get(&product_id) else {
        return (
            StatusCode::NOT_FOUND,
            Html("<span class=\"cart-error\">Unknown product</span>"),
        )
            .into_response();
    };

    let mut cart = CartStore::open(SessionStorage::read(&session).await);
    if let Err(err) = cart.add_item(product, form.quantity.unwrap_or(1)) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(format!("<span class=\"cart-error\">{err}</span>")),
        )
            .into_response();
    }
    cart.storage().flush(&session).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_items(),
        },
    )
        .into_response()
}

/// Update cart item quantity (HTMX).
///
/// A zero or negative quantity removes the line, matching the store policy.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let language = form_language(form.lang.as_deref());
    let product_id = ProductId::new(form.product_id);

    let mut cart = CartStore::open(SessionStorage::read(&session).await);
    cart.update_quantity(&product_id, form.quantity);
    cart.storage().flush(&session).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            ctx: PageContext::new(language),
            cart: CartView::new(cart.state(), language),
        },
    )
        .into_response()
}

/// Remove item from cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let language = form_language(form.lang.as_deref());
    let product_id = ProductId::new(form.product_id);

    let mut cart = CartStore::open(SessionStorage::read(&session).await);
    cart.remove_item(&product_id);
    cart.storage().flush(&session).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            ctx: PageContext::new(language),
            cart: CartView::new(cart.state(), language),
        },
    )
        .into_response()
}

/// Empty the whole cart (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session, Form(form): Form<ClearCartForm>) -> Response {
    let language = form_language(form.lang.as_deref());

    let mut cart = CartStore::open(SessionStorage::read(&session).await);
    cart.clear();
    cart.storage().flush(&session).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            ctx: PageContext::new(language),
            cart: CartView::new(cart.state(), language),
        },
    )
        .into_response()
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = CartStore::open(SessionStorage::read(&session).await);
    CartCountTemplate {
        count: cart.total_items(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use crate::catalog::Catalog;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_clear_route_empties_a_persisted_cart() {
        let session = session();
        let catalog = Catalog::new();
        let product = catalog.all().first().unwrap();

        let mut cart = CartStore::open(SessionStorage::read(&session).await);
        cart.add_item(product, 2).unwrap();
        cart.storage().flush(&session).await;

        let response = clear(session.clone(), Form(ClearCartForm { lang: None })).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("HX-Trigger").unwrap(),
            "cart-updated"
        );

        let cart = CartStore::open(SessionStorage::read(&session).await);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_clear_route_on_an_empty_cart_is_ok() {
        let session = session();
        let response = clear(session, Form(ClearCartForm { lang: None })).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
