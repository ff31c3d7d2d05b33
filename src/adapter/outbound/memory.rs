//! In-memory store implementation.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{Cart, CartRecord, FavoriteLaundromat, OrderedList, StoreId};
use crate::error::Result;
use crate::port::{CartStore, FavoriteStore};

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    carts: RwLock<HashMap<StoreId, CartRecord>>,
    favorites: RwLock<OrderedList<FavoriteLaundromat>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored carts.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.carts.read().len()
    }

    /// Raw stored record for a location.
    #[must_use]
    pub fn record(&self, store_id: &StoreId) -> Option<CartRecord> {
        self.carts.read().get(store_id).cloned()
    }
}

impl CartStore for MemoryStore {
    async fn save(&self, cart: &Cart) -> Result<()> {
        self.carts
            .write()
            .insert(cart.store_id().clone(), cart.to_record());
        Ok(())
    }

    async fn load(&self, store_id: &StoreId) -> Result<Option<Cart>> {
        Ok(self.record(store_id).map(Cart::from_record))
    }

    async fn delete(&self, store_id: &StoreId) -> Result<bool> {
        Ok(self.carts.write().remove(store_id).is_some())
    }
}

impl FavoriteStore for MemoryStore {
    async fn load_favorites(&self) -> Result<OrderedList<FavoriteLaundromat>> {
        Ok(self.favorites.read().clone())
    }

    async fn save_favorites(&self, favorites: &OrderedList<FavoriteLaundromat>) -> Result<()> {
        *self.favorites.write() = favorites.clone();
        Ok(())
    }
}
