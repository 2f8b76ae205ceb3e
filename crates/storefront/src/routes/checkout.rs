//! Simulated checkout flow.
//!
//! There is no payment gateway: the visitor fills in delivery details, gets
//! a static UPI QR payload to scan, and confirms payment manually. The
//! confirmation clears the cart and lands on the thank-you page; nothing is
//! settled or persisted as an order.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use urban_elephant_core::{Language, Rupees};

use crate::cart::{CartStore, SessionStorage};
use crate::config::UpiConfig;
use crate::filters;
use crate::i18n::Labels;
use crate::state::AppState;

use super::cart::CartView;
use super::{PageContext, PageQuery};

/// Orders at or above this subtotal ship free.
const FREE_SHIPPING_THRESHOLD: Rupees = Rupees::new(5_000);

/// Flat shipping charge below the threshold.
const SHIPPING_FLAT_FEE: Rupees = Rupees::new(500);

/// Shipping charge for a subtotal.
#[must_use]
pub fn shipping_for(subtotal: Rupees) -> Rupees {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        Rupees::ZERO
    } else {
        SHIPPING_FLAT_FEE
    }
}

/// Build the `upi://pay` payload the payment QR encodes.
///
/// The amount is the whole-rupee grand total; free-text values are
/// percent-encoded so the payload survives QR scanning apps that parse it
/// as a URL.
#[must_use]
pub fn upi_payload(upi: &UpiConfig, total: Rupees, item_count: usize) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR&tn={}",
        urlencoding::encode(&upi.payee_vpa),
        urlencoding::encode(&upi.payee_name),
        total.as_i64(),
        urlencoding::encode(&format!("Order Payment - {item_count} items")),
    )
}

/// Customer delivery details collected before payment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

impl CustomerDetails {
    /// Validate all fields, returning one user-facing message per problem.
    #[must_use]
    pub fn validate(&self, labels: &Labels) -> Vec<String> {
        let mut errors = Vec::new();

        let required = [
            (&self.name, labels.name),
            (&self.email, labels.email),
            (&self.phone, labels.phone),
            (&self.address, labels.address),
            (&self.city, labels.city),
            (&self.state, labels.state),
            (&self.pincode, labels.pincode),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                errors.push(format!("{label}: required"));
            }
        }

        if !self.email.trim().is_empty() && !is_plausible_email(&self.email) {
            errors.push(format!("{}: invalid", labels.email));
        }
        if !self.phone.trim().is_empty() && !is_digits(&self.phone, 10) {
            errors.push(format!("{}: invalid", labels.phone));
        }
        if !self.pincode.trim().is_empty() && !is_digits(&self.pincode, 6) {
            errors.push(format!("{}: invalid", labels.pincode));
        }

        errors
    }
}

fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn is_digits(value: &str, len: usize) -> bool {
    let value = value.trim();
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// Checkout form data: delivery details plus the page language.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(flatten)]
    pub details: CustomerDetails,
    pub lang: Option<String>,
}

/// Checkout page template (customer details + order summary).
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub ctx: PageContext,
    pub cart: CartView,
    pub details: CustomerDetails,
    pub errors: Vec<String>,
}

/// Payment page template (static UPI QR payload).
#[derive(Template, WebTemplate)]
#[template(path = "checkout/payment.html")]
pub struct PaymentTemplate {
    pub ctx: PageContext,
    pub grand_total: String,
    pub qr_url: String,
}

/// QR image URL for a UPI payload, rendered by a public QR service.
fn qr_url(payload: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=240x240&data={}",
        urlencoding::encode(payload)
    )
}

/// Thank-you page template.
#[derive(Template, WebTemplate)]
#[template(path = "thank_you.html")]
pub struct ThankYouTemplate {
    pub ctx: PageContext,
}

/// Display the checkout page, or bounce back to the cart when it is empty.
#[instrument(skip(session))]
pub async fn show(Query(query): Query<PageQuery>, session: Session) -> Response {
    let language = query.language();
    let cart = CartStore::open(SessionStorage::read(&session).await);

    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutTemplate {
        ctx: PageContext::new(language),
        cart: CartView::new(cart.state(), language),
        details: CustomerDetails::default(),
        errors: Vec::new(),
    }
    .into_response()
}

/// Validate customer details and show the payment view.
#[instrument(skip(state, session, form))]
pub async fn pay(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let language = form
        .lang
        .as_deref()
        .map_or(Language::En, Language::from_code);
    let cart = CartStore::open(SessionStorage::read(&session).await);

    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    let errors = form.details.validate(Labels::get(language));
    if !errors.is_empty() {
        return CheckoutTemplate {
            ctx: PageContext::new(language),
            cart: CartView::new(cart.state(), language),
            details: form.details,
            errors,
        }
        .into_response();
    }

    let subtotal = cart.total_price();
    let grand_total = subtotal + shipping_for(subtotal);

    let payload = upi_payload(&state.config().upi, grand_total, cart.items().len());

    PaymentTemplate {
        ctx: PageContext::new(language),
        grand_total: grand_total.to_string(),
        qr_url: qr_url(&payload),
    }
    .into_response()
}

/// Visitor confirmed the (simulated) payment: clear the cart and redirect
/// to the confirmation page.
#[instrument(skip(session))]
pub async fn complete(session: Session, Form(query): Form<PageQuery>) -> Redirect {
    let mut cart = CartStore::open(SessionStorage::read(&session).await);
    cart.clear();
    cart.storage().flush(&session).await;

    match query.language() {
        Language::En => Redirect::to("/thank-you"),
        Language::Ta => Redirect::to("/thank-you?lang=ta"),
    }
}

/// Order confirmation page.
#[instrument]
pub async fn thank_you(Query(query): Query<PageQuery>) -> ThankYouTemplate {
    ThankYouTemplate {
        ctx: PageContext::new(query.language()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_is_free_at_the_threshold() {
        assert_eq!(shipping_for(Rupees::new(5_000)), Rupees::ZERO);
        assert_eq!(shipping_for(Rupees::new(133_996)), Rupees::ZERO);
    }

    #[test]
    fn test_shipping_is_flat_below_the_threshold() {
        assert_eq!(shipping_for(Rupees::new(4_999)), Rupees::new(500));
        assert_eq!(shipping_for(Rupees::ZERO), Rupees::new(500));
    }

    #[test]
    fn test_upi_payload_shape() {
        let upi = UpiConfig {
            payee_vpa: "merchant@upi".to_string(),
            payee_name: "The Urban Elephant".to_string(),
        };

        let payload = upi_payload(&upi, Rupees::new(36_444), 2);

        assert_eq!(
            payload,
            "upi://pay?pa=merchant%40upi&pn=The%20Urban%20Elephant&am=36444&cu=INR&tn=Order%20Payment%20-%202%20items"
        );
    }

    fn details() -> CustomerDetails {
        CustomerDetails {
            name: "Arun Kumar".to_string(),
            email: "arun@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Temple Street".to_string(),
            city: "Chennai".to_string(),
            state: "Tamil Nadu".to_string(),
            pincode: "600001".to_string(),
        }
    }

    #[test]
    fn test_complete_details_validate() {
        assert!(details().validate(Labels::get(Language::En)).is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported_individually() {
        let mut d = details();
        d.city = String::new();
        d.state = "  ".to_string();

        let errors = d.validate(Labels::get(Language::En));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_malformed_contact_fields_are_rejected() {
        let mut d = details();
        d.email = "not-an-email".to_string();
        d.phone = "12345".to_string();
        d.pincode = "60000a".to_string();

        let errors = d.validate(Labels::get(Language::En));
        assert_eq!(errors.len(), 3);
    }
}
