//! Store ports for persistence operations.
//!
//! The core calls these after mutations; it does not know the storage
//! mechanism behind them.

use std::future::Future;

use crate::domain::{Cart, FavoriteLaundromat, OrderedList, StoreId};
use crate::error::Result;

/// Storage operations for carts, one record per location.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Methods return futures that can be awaited
/// - `save` replaces any existing record for the cart's location
pub trait CartStore: Send + Sync {
    /// Save a cart, replacing the record for its location.
    fn save(&self, cart: &Cart) -> impl Future<Output = Result<()>> + Send;

    /// Load the cart for a location.
    fn load(&self, store_id: &StoreId) -> impl Future<Output = Result<Option<Cart>>> + Send;

    /// Delete the cart for a location. Returns true if a record existed.
    fn delete(&self, store_id: &StoreId) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for the favorites list.
pub trait FavoriteStore: Send + Sync {
    /// Load the favorites list; an absent record loads as an empty list.
    fn load_favorites(
        &self,
    ) -> impl Future<Output = Result<OrderedList<FavoriteLaundromat>>> + Send;

    /// Replace the stored favorites list.
    fn save_favorites(
        &self,
        favorites: &OrderedList<FavoriteLaundromat>,
    ) -> impl Future<Output = Result<()>> + Send;
}
