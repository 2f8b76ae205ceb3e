//! Core types for The Urban Elephant.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod language;
pub mod price;
pub mod product;

pub use id::{ProductId, ReviewId};
pub use language::Language;
pub use price::Rupees;
pub use product::{PriceBreakdown, Product, WoodType};
