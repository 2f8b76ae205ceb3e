//! The cart store: the authoritative, persisted list of line items.
//!
//! All mutations are synchronous and atomic; each one persists a snapshot
//! through the storage port and notifies subscribers with the final state.
//! Persistence failures are logged and never block a mutation, so the cart
//! stays usable when durable storage is unavailable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use urban_elephant_core::{Product, ProductId, Rupees};

use super::storage::CartStorage;

/// Input validation errors for cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// `add_item` was called with a quantity below one.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),
}

/// One line of the cart: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit base price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Rupees {
        self.product.base_price * self.quantity
    }
}

/// The full persisted cart: line items in insertion order.
///
/// There is at most one line per product id; adding an existing product
/// merges into its line instead of appending a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Sum of quantities across all lines (not the line count).
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `base_price * quantity` across all lines.
    #[must_use]
    pub fn total_price(&self) -> Rupees {
        self.items.iter().map(CartItem::line_price).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Observer callback invoked with the state after every mutation.
pub type Subscriber = Box<dyn Fn(&CartState) + Send>;

/// The cart store.
///
/// Owns the [`CartState`], a storage port, and a set of subscribers. Built
/// per visitor; tests construct isolated instances over [`super::MemoryStorage`]
/// instead of sharing any global state.
pub struct CartStore<S: CartStorage> {
    state: CartState,
    storage: S,
    subscribers: Vec<Subscriber>,
}

impl<S: CartStorage> CartStore<S> {
    /// Open a store, rehydrating from storage.
    ///
    /// A missing payload starts an empty cart; an unparseable one is logged
    /// and also falls back to empty rather than failing store creation.
    pub fn open(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => CartState::default(),
            Err(err) => {
                tracing::warn!("discarding corrupt cart payload: {err}");
                CartState::default()
            }
        };

        Self {
            state,
            storage,
            subscribers: Vec::new(),
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// Merges into the existing line for the same product id (saturating at
    /// `u32::MAX` rather than overflowing); otherwise appends a new line at
    /// the end, preserving insertion order for display.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity < 1`; the cart
    /// is left untouched and nothing is persisted.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self
            .state
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.state.items.push(CartItem {
                product: product.clone(),
                quantity,
            }),
        }

        self.commit();
        Ok(())
    }

    /// Remove the line for a product id. Removing an absent id is a no-op,
    /// not an error.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.state.items.retain(|item| &item.product.id != product_id);
        self.commit();
    }

    /// Set the quantity of an existing line.
    ///
    /// A zero or negative quantity means "remove" and behaves exactly like
    /// [`Self::remove_item`] (a documented policy, not a quiet clamp). A
    /// positive quantity replaces the line's quantity; an absent id is a
    /// no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(item) = self
            .state
            .items
            .iter_mut()
            .find(|item| &item.product.id == product_id)
        {
            item.quantity = quantity;
        }
        self.commit();
    }

    /// Empty the cart unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.state.items.clear();
        self.commit();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }

    /// Sum of `base_price * quantity` across all lines, exact.
    #[must_use]
    pub fn total_price(&self) -> Rupees {
        self.state.total_price()
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.state.items
    }

    /// The full state, for serialization into views.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The storage port, e.g. to flush a session-backed buffer.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Register an observer invoked with the state after every mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CartState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Persist the current state and notify subscribers.
    ///
    /// A write failure keeps the in-memory state authoritative; it is logged
    /// for diagnostics and otherwise invisible to the caller.
    fn commit(&mut self) {
        if let Err(err) = self.storage.save(&self.state) {
            tracing::warn!("failed to persist cart state: {err}");
        }
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use urban_elephant_core::{PriceBreakdown, WoodType};

    use super::super::storage::{MemoryStorage, StorageError};
    use super::*;

    fn product(id: &str, base_price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Elephant {id}"),
            name_ta: format!("யானை {id}"),
            description: "Handcrafted wooden elephant statue.".to_string(),
            description_ta: "கைவினை மர யானை சிலை.".to_string(),
            wood_type: WoodType::Aakeshya,
            size_in_feet: 1.5,
            weight_in_kg: 25,
            base_price: Rupees::new(base_price),
            breakdown: PriceBreakdown {
                cost: Rupees::new(base_price - 1_500),
                gst: Rupees::ZERO,
                packing: Rupees::new(1_000),
                freight: Rupees::new(500),
            },
            images: vec!["/1.5 Feet 25 kg.png".to_string()],
            in_stock: true,
        }
    }

    fn empty_store() -> CartStore<MemoryStorage> {
        CartStore::open(MemoryStorage::new())
    }

    /// Storage whose writes always fail, for the write-failure recovery path.
    struct FailingStorage;

    impl CartStorage for FailingStorage {
        fn load(&self) -> Result<Option<CartState>, StorageError> {
            Ok(None)
        }

        fn save(&mut self, _state: &CartState) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_add_merges_lines_for_the_same_product() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let mut cart = empty_store();

        cart.add_item(&p1, 2).unwrap();
        cart.add_item(&p1, 1).unwrap();
        cart.add_item(&p1, 4).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[test]
    fn test_totals_track_quantities_and_prices() {
        let p1 = product("elephant-2ft-aakeshya", 30_620);
        let p2 = product("elephant-2ft-mahogany", 36_444);
        let mut cart = empty_store();

        cart.add_item(&p1, 3).unwrap();
        cart.add_item(&p2, 2).unwrap();

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), Rupees::new(3 * 30_620 + 2 * 36_444));
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        let p1 = product("elephant-3ft-aakeshya", 125_260);

        for quantity in [0, -5] {
            let mut cart = empty_store();
            cart.add_item(&p1, 2).unwrap();
            cart.update_quantity(&p1.id, quantity);
            assert!(cart.is_empty(), "quantity {quantity} should remove the line");
        }
    }

    #[test]
    fn test_update_replaces_quantity_exactly() {
        let p1 = product("elephant-3ft-aakeshya", 125_260);
        let mut cart = empty_store();
        cart.add_item(&p1, 2).unwrap();

        cart.update_quantity(&p1.id, 9);

        assert_eq!(cart.items()[0].quantity, 9);
    }

    #[test]
    fn test_update_of_absent_id_is_a_noop() {
        let p1 = product("elephant-3ft-aakeshya", 125_260);
        let mut cart = empty_store();
        cart.add_item(&p1, 2).unwrap();
        let before = cart.state().clone();

        cart.update_quantity(&ProductId::new("elephant-9ft-teak"), 3);

        assert_eq!(cart.state(), &before);
    }

    #[test]
    fn test_remove_of_absent_id_leaves_state_unchanged() {
        let p1 = product("elephant-1-5ft-mahogany", 18_972);
        let mut cart = empty_store();
        cart.add_item(&p1, 1).unwrap();
        let before = cart.state().clone();

        cart.remove_item(&ProductId::new("not-in-cart"));

        assert_eq!(cart.state(), &before);
    }

    #[test]
    fn test_state_round_trips_through_serialization() {
        let p1 = product("elephant-2-5ft-aakeshya", 62_652);
        let p2 = product("elephant-2-5ft-mahogany", 68_476);
        let mut cart = empty_store();
        cart.add_item(&p1, 2).unwrap();
        cart.add_item(&p2, 5).unwrap();

        let json = serde_json::to_string(cart.state()).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();

        assert_eq!(&restored, cart.state());
        assert_eq!(restored.items[0].product, p1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let p1 = product("elephant-2ft-aakeshya", 30_620);
        let mut cart = empty_store();
        cart.add_item(&p1, 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_mixed_add_scenario() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let p2 = product("elephant-2ft-aakeshya", 30_620);
        let mut cart = empty_store();

        cart.add_item(&p1, 2).unwrap();
        cart.add_item(&p2, 1).unwrap();
        cart.add_item(&p1, 1).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].product.id, p1.id);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[1].quantity, 1);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Rupees::new(3 * 16_060 + 30_620));
    }

    #[test]
    fn test_add_then_update_to_zero_empties_the_cart() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let mut cart = empty_store();

        cart.add_item(&p1, 1).unwrap();
        cart.update_quantity(&p1.id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_non_positive_add_is_rejected() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let mut cart = empty_store();

        assert_eq!(cart.add_item(&p1, -1), Err(CartError::InvalidQuantity(-1)));
        assert_eq!(cart.add_item(&p1, 0), Err(CartError::InvalidQuantity(0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rejected_add_does_not_persist() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let mut cart = empty_store();

        let _ = cart.add_item(&p1, -1);

        assert!(cart.storage().payload().is_none());
    }

    #[test]
    fn test_quantity_merge_saturates_instead_of_overflowing() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let mut cart = empty_store();

        cart.add_item(&p1, i64::from(u32::MAX)).unwrap();
        cart.add_item(&p1, 1).unwrap();

        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_write_failure_does_not_lose_the_mutation() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let mut cart = CartStore::open(FailingStorage);

        cart.add_item(&p1, 2).unwrap();

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Rupees::new(32_120));
    }

    #[test]
    fn test_corrupt_payload_opens_an_empty_cart() {
        let cart = CartStore::open(MemoryStorage::with_payload("{\"items\": 7}"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_missing_payload_opens_an_empty_cart() {
        let cart = CartStore::open(MemoryStorage::new());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rehydration_restores_a_persisted_cart() {
        let p1 = product("elephant-2ft-mahogany", 36_444);
        let mut first = empty_store();
        first.add_item(&p1, 3).unwrap();
        let payload = first.storage().payload().unwrap().to_string();

        let second = CartStore::open(MemoryStorage::with_payload(payload));

        assert_eq!(second.state(), first.state());
    }

    #[test]
    fn test_subscribers_observe_the_final_state() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut cart = empty_store();

        for _ in 0..2 {
            let seen = Arc::clone(&seen);
            cart.subscribe(move |state| seen.lock().unwrap().push(state.total_items()));
        }

        cart.add_item(&p1, 2).unwrap();
        cart.update_quantity(&p1.id, 5);

        // Both subscribers see each of the two mutations, final state only.
        assert_eq!(*seen.lock().unwrap(), vec![2, 2, 5, 5]);
    }

    #[test]
    fn test_insertion_order_survives_updates() {
        let p1 = product("elephant-1-5ft-aakeshya", 16_060);
        let p2 = product("elephant-2ft-aakeshya", 30_620);
        let p3 = product("elephant-3ft-mahogany", 133_996);
        let mut cart = empty_store();

        cart.add_item(&p1, 1).unwrap();
        cart.add_item(&p2, 1).unwrap();
        cart.add_item(&p3, 1).unwrap();
        cart.update_quantity(&p1.id, 10);
        cart.add_item(&p2, 4).unwrap();

        let order: Vec<&ProductId> = cart.items().iter().map(|i| &i.product.id).collect();
        assert_eq!(order, vec![&p1.id, &p2.id, &p3.id]);
    }
}
