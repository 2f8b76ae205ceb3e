//! The shopping cart: state, mutations, and persistence.
//!
//! The cart is the one stateful component of the storefront. [`CartStore`]
//! owns the authoritative list of line items and persists a snapshot through
//! the [`CartStorage`] port after every mutation, so the mutation logic can
//! be exercised against an in-memory backend in tests and against the
//! visitor's session in production.

pub mod session;
pub mod storage;
pub mod store;

pub use session::{CART_STORAGE_KEY, SessionStorage};
pub use storage::{CartStorage, MemoryStorage, StorageError};
pub use store::{CartError, CartItem, CartState, CartStore};
