//! Urban Elephant Core - Shared types library.
//!
//! This crate provides common types used across all Urban Elephant components:
//! - `storefront` - Public-facing bilingual e-commerce site
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and prices, plus the product model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
