//! Domain models for storefront.

pub mod review;

pub use review::{NewReview, Review, ReviewValidationError};
