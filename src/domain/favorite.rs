//! Favorited laundromats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::LaundromatId;
use super::list::{Handle, OrderedList};

/// A laundromat the customer marked as a favorite.
///
/// Two favorites match when they name the same laundromat; the creation
/// date does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteLaundromat {
    created_at: DateTime<Utc>,
    laundromat_id: LaundromatId,
}

impl FavoriteLaundromat {
    /// Create a favorite stamped with `created_at`.
    #[must_use]
    pub fn new(laundromat_id: LaundromatId, created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            laundromat_id,
        }
    }

    /// Get the laundromat ID.
    #[must_use]
    pub fn laundromat_id(&self) -> &LaundromatId {
        &self.laundromat_id
    }

    /// Get when the favorite was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PartialEq for FavoriteLaundromat {
    fn eq(&self, other: &Self) -> bool {
        self.laundromat_id == other.laundromat_id
    }
}

impl Eq for FavoriteLaundromat {}

/// Ordered set of favorites owned by one session.
#[derive(Debug, Clone, Default)]
pub struct FavoritesRegistry {
    list: OrderedList<FavoriteLaundromat>,
}

impl FavoritesRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` unless it is already a favorite. Returns true if added.
    pub fn add(&mut self, id: LaundromatId, now: DateTime<Utc>) -> bool {
        self.list
            .append_unique(FavoriteLaundromat::new(id, now))
            .is_some()
    }

    /// Remove `id`. Returns true if it was a favorite.
    pub fn remove(&mut self, id: &LaundromatId) -> bool {
        let Some(handle) = self.handle_of(id) else {
            return false;
        };
        self.list.remove(handle).is_ok()
    }

    /// Flip membership of `id`. Returns true if it is a favorite afterwards.
    pub fn toggle(&mut self, id: LaundromatId, now: DateTime<Utc>) -> bool {
        if self.remove(&id) {
            return false;
        }
        self.add(id, now)
    }

    /// Returns true if `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &LaundromatId) -> bool {
        self.handle_of(id).is_some()
    }

    /// Favorites in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &FavoriteLaundromat> {
        self.list.iter()
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Borrow the backing list.
    #[must_use]
    pub fn as_list(&self) -> &OrderedList<FavoriteLaundromat> {
        &self.list
    }

    fn handle_of(&self, id: &LaundromatId) -> Option<Handle> {
        self.list
            .handles()
            .find(|&handle| {
                self.list
                    .get(handle)
                    .is_some_and(|favorite| favorite.laundromat_id() == id)
            })
    }
}

impl From<OrderedList<FavoriteLaundromat>> for FavoritesRegistry {
    /// Wrap a loaded list, dropping later duplicates of the same laundromat.
    fn from(list: OrderedList<FavoriteLaundromat>) -> Self {
        let mut unique = OrderedList::new();
        for favorite in &list {
            unique.append_unique(favorite.clone());
        }
        Self { list: unique }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn add_is_append_if_absent() {
        let mut favorites = FavoritesRegistry::new();
        assert!(favorites.add(LaundromatId::new("a"), at(1)));
        assert!(favorites.add(LaundromatId::new("b"), at(2)));
        assert!(!favorites.add(LaundromatId::new("a"), at(3)));

        let ids: Vec<_> = favorites.iter().map(|f| f.laundromat_id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(favorites.iter().next().unwrap().created_at(), at(1));
    }

    #[test]
    fn remove_by_match() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(LaundromatId::new("a"), at(1));
        favorites.add(LaundromatId::new("b"), at(2));

        assert!(favorites.remove(&LaundromatId::new("a")));
        assert!(!favorites.remove(&LaundromatId::new("a")));
        assert!(!favorites.contains(&LaundromatId::new("a")));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.as_list().check_invariants().is_ok());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = FavoritesRegistry::new();
        assert!(favorites.toggle(LaundromatId::new("a"), at(1)));
        assert!(!favorites.toggle(LaundromatId::new("a"), at(2)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn equality_ignores_creation_date() {
        let a = FavoriteLaundromat::new(LaundromatId::new("a"), at(1));
        let b = FavoriteLaundromat::new(LaundromatId::new("a"), at(9));
        assert_eq!(a, b);
    }

    #[test]
    fn from_list_drops_duplicates() {
        let list = OrderedList::from(vec![
            FavoriteLaundromat::new(LaundromatId::new("a"), at(1)),
            FavoriteLaundromat::new(LaundromatId::new("a"), at(2)),
            FavoriteLaundromat::new(LaundromatId::new("b"), at(3)),
        ]);
        let favorites = FavoritesRegistry::from(list);
        assert_eq!(favorites.len(), 2);
    }
}
