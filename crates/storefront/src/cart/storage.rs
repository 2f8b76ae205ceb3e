//! Persistence port for the cart store.
//!
//! The store never talks to a backend directly; it goes through
//! [`CartStorage`] so the mutation logic stays testable. Production uses the
//! session-backed implementation in [`crate::cart::session`]; tests use
//! [`MemoryStorage`].

use thiserror::Error;

use super::store::CartState;

/// Errors from the durable cart storage backend.
///
/// These are recovered locally: a failed read opens an empty cart, a failed
/// write leaves the in-memory cart authoritative. Neither is surfaced to the
/// visitor.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored payload could not be parsed, or the state could not be
    /// serialized.
    #[error("cart payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// The backend itself rejected the operation.
    #[error("cart storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value storage for the serialized cart.
///
/// Implementations hold the cart snapshot as a JSON string under a single
/// fixed key, the shape a browser would keep in `localStorage`.
pub trait CartStorage {
    /// Read the persisted cart state, `None` if nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Payload`] when a stored payload exists but
    /// cannot be parsed.
    fn load(&self) -> Result<Option<CartState>, StorageError>;

    /// Persist a snapshot of the cart state.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the snapshot cannot be serialized or
    /// the backend rejects the write.
    fn save(&mut self, state: &CartState) -> Result<(), StorageError>;
}

/// In-memory cart storage backed by a JSON string.
///
/// Serializes through the same JSON path as the real backend so round-trip
/// behaviour matches production.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payload: Option<String>,
}

impl MemoryStorage {
    /// Empty storage: `load` yields `None`.
    #[must_use]
    pub const fn new() -> Self {
        Self { payload: None }
    }

    /// Storage pre-seeded with a raw payload, parseable or not.
    #[must_use]
    pub fn with_payload(raw: impl Into<String>) -> Self {
        Self {
            payload: Some(raw.into()),
        }
    }

    /// The raw stored payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<CartState>, StorageError> {
        match &self.payload {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &CartState) -> Result<(), StorageError> {
        self.payload = Some(serde_json::to_string(state)?);
        Ok(())
    }
}
