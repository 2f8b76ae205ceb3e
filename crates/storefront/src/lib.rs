//! Urban Elephant Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
