//! Session-backed cart storage.
//!
//! The visitor's session plays the role `localStorage` plays in a browser
//! app: a durable key-value store scoped to one client. [`SessionStorage`]
//! is a request-scoped buffer over it - `read` snapshots the payload stored
//! under [`CART_STORAGE_KEY`] before the handler touches the cart, every
//! [`CartStorage::save`] lands in the buffer synchronously, and `flush`
//! pushes the buffer back into the session once the handler is done.
//!
//! A flush failure is logged and swallowed: the response is still built from
//! the in-memory cart, the visitor just loses the snapshot for next time.

use tower_sessions::Session;

use super::storage::{CartStorage, StorageError};
use super::store::CartState;

/// The single session key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "elephant-cart-storage";

/// Request-scoped cart storage buffered over the tower session.
#[derive(Debug)]
pub struct SessionStorage {
    payload: Option<String>,
    dirty: bool,
}

impl SessionStorage {
    /// Snapshot the stored cart payload out of the session.
    ///
    /// A session read failure is treated like a missing payload; the cart
    /// will open empty.
    pub async fn read(session: &Session) -> Self {
        let payload = match session.get::<String>(CART_STORAGE_KEY).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("failed to read cart from session: {err}");
                None
            }
        };

        Self {
            payload,
            dirty: false,
        }
    }

    /// Write the buffered payload back into the session, if any mutation
    /// happened. Failures are logged, never propagated.
    pub async fn flush(&self, session: &Session) {
        if !self.dirty {
            return;
        }
        let Some(payload) = &self.payload else {
            return;
        };
        if let Err(err) = session.insert(CART_STORAGE_KEY, payload).await {
            tracing::warn!("failed to persist cart to session: {err}");
        }
    }
}

impl CartStorage for SessionStorage {
    fn load(&self) -> Result<Option<CartState>, StorageError> {
        match &self.payload {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &CartState) -> Result<(), StorageError> {
        self.payload = Some(serde_json::to_string(state)?);
        self.dirty = true;
        Ok(())
    }
}
