//! Favorites service.
//!
//! Loads the customer's favorites once, applies changes to the in-memory
//! registry and mirrors every change that altered membership back to the
//! [`FavoriteStore`].

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::{FavoritesRegistry, LaundromatId};
use crate::error::Result;
use crate::port::FavoriteStore;

/// Favorites registry bound to its persistence.
pub struct FavoritesService<S> {
    registry: FavoritesRegistry,
    store: Arc<S>,
}

impl<S: FavoriteStore> FavoritesService<S> {
    /// Load favorites from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn load(store: Arc<S>) -> Result<Self> {
        let registry = FavoritesRegistry::from(store.load_favorites().await?);
        debug!(count = registry.len(), "Favorites loaded");
        Ok(Self { registry, store })
    }

    /// Get the registry.
    #[must_use]
    pub fn registry(&self) -> &FavoritesRegistry {
        &self.registry
    }

    /// Add `id`. Returns true if it was not a favorite before.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub async fn add(&mut self, id: LaundromatId) -> Result<bool> {
        let added = self.registry.add(id, Utc::now());
        if added {
            self.save().await?;
        }
        Ok(added)
    }

    /// Remove `id`. Returns true if it was a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub async fn remove(&mut self, id: &LaundromatId) -> Result<bool> {
        let removed = self.registry.remove(id);
        if removed {
            self.save().await?;
        }
        Ok(removed)
    }

    /// Flip membership of `id`. Returns true if it is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub async fn toggle(&mut self, id: LaundromatId) -> Result<bool> {
        let now_favorite = self.registry.toggle(id, Utc::now());
        self.save().await?;
        Ok(now_favorite)
    }

    async fn save(&self) -> Result<()> {
        self.store.save_favorites(self.registry.as_list()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::MemoryStore;

    #[tokio::test]
    async fn changes_are_mirrored_to_store() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesService::load(store.clone()).await.unwrap();

        assert!(favorites.add(LaundromatId::new("a")).await.unwrap());
        assert!(!favorites.add(LaundromatId::new("a")).await.unwrap());
        assert!(favorites.toggle(LaundromatId::new("b")).await.unwrap());
        assert_eq!(store.load_favorites().await.unwrap().len(), 2);

        assert!(favorites.remove(&LaundromatId::new("a")).await.unwrap());
        let reloaded = FavoritesService::load(store).await.unwrap();
        assert!(!reloaded.registry().contains(&LaundromatId::new("a")));
        assert!(reloaded.registry().contains(&LaundromatId::new("b")));
    }
}
