//! JSON file store implementation.
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/carts/<store_id>.json
//! <root>/favorites.json
//! ```
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so a crash never leaves a half-written record behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::domain::{Cart, CartRecord, FavoriteLaundromat, OrderedList, StoreId};
use crate::error::Result;
use crate::port::{CartStore, FavoriteStore};

const CARTS_DIR: &str = "carts";
const FAVORITES_FILE: &str = "favorites.json";

/// File-backed store writing one JSON document per record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`. Directories are created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record for `store_id`.
    #[must_use]
    pub fn cart_path(&self, store_id: &StoreId) -> PathBuf {
        self.root
            .join(CARTS_DIR)
            .join(format!("{}.json", file_stem(store_id.as_str())))
    }

    /// Path of the favorites record.
    #[must_use]
    pub fn favorites_path(&self) -> PathBuf {
        self.root.join(FAVORITES_FILE)
    }
}

/// Map an ID to a safe file stem.
fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

impl CartStore for JsonFileStore {
    async fn save(&self, cart: &Cart) -> Result<()> {
        let path = self.cart_path(cart.store_id());
        let bytes = serde_json::to_vec_pretty(&cart.to_record())?;
        write_atomic(&path, &bytes).await?;
        debug!(path = %path.display(), lines = cart.len(), "Cart saved");
        Ok(())
    }

    async fn load(&self, store_id: &StoreId) -> Result<Option<Cart>> {
        let path = self.cart_path(store_id);
        let Some(bytes) = read_optional(&path).await? else {
            return Ok(None);
        };
        let record: CartRecord = serde_json::from_slice(&bytes)?;
        Ok(Some(Cart::from_record(record)))
    }

    async fn delete(&self, store_id: &StoreId) -> Result<bool> {
        let path = self.cart_path(store_id);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Cart deleted");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl FavoriteStore for JsonFileStore {
    async fn load_favorites(&self) -> Result<OrderedList<FavoriteLaundromat>> {
        match read_optional(&self.favorites_path()).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(OrderedList::new()),
        }
    }

    async fn save_favorites(&self, favorites: &OrderedList<FavoriteLaundromat>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(favorites)?;
        write_atomic(&self.favorites_path(), &bytes).await?;
        debug!(count = favorites.len(), "Favorites saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemChoice, ItemId, LaundromatId, MenuId, OrderItem};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn file_stem_replaces_unsafe_characters() {
        assert_eq!(file_stem("stuy/../etc"), "stuy____etc");
        assert_eq!(file_stem("store-1_a"), "store-1_a");
    }

    #[tokio::test]
    async fn cart_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let mut cart = Cart::new(StoreId::new("stuy"), "Stuy Wash N Dry");
        let mut item = OrderItem::new(ItemId::new(1), "wash", MenuId::new(1), "Wash", dec!(2.50))
            .with_choices(vec![ItemChoice::new("Softener").with_price(dec!(0.50))]);
        item.select_choice("Softener");
        cart.add_item(item);

        store.save(&cart).await.unwrap();
        assert!(store.cart_path(cart.store_id()).exists());

        let loaded = store.load(cart.store_id()).await.unwrap().unwrap();
        assert_eq!(loaded.to_record(), cart.to_record());
        assert_eq!(loaded.subtotal(), Ok(dec!(3.00)));
    }

    #[tokio::test]
    async fn missing_records_are_absent_not_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(store.load(&StoreId::new("nope")).await.unwrap().is_none());
        assert!(!store.delete(&StoreId::new("nope")).await.unwrap());
        assert!(store.load_favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn favorites_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let list = OrderedList::from(vec![
            FavoriteLaundromat::new(LaundromatId::new("a"), Utc::now()),
            FavoriteLaundromat::new(LaundromatId::new("b"), Utc::now()),
        ]);

        store.save_favorites(&list).await.unwrap();
        let loaded = store.load_favorites().await.unwrap();
        let ids: Vec<_> = loaded.iter().map(|f| f.laundromat_id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let path = store.cart_path(&StoreId::new("stuy"));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"{not json").unwrap();

        assert!(matches!(
            store.load(&StoreId::new("stuy")).await,
            Err(crate::error::Error::Json(_))
        ));
    }
}
