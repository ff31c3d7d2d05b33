//! Storage- and UI-agnostic domain logic.
//!
//! - [`list`] - Arena-backed doubly linked list addressed by [`Handle`]s
//! - [`cart`] - Cart lines, merging and subtotal
//! - [`observer`] - Cart change notification
//! - [`favorite`] - Favorited laundromats

pub mod cart;
pub mod choice;
pub mod error;
pub mod favorite;
pub mod id;
pub mod list;
pub mod money;
pub mod observer;
pub mod order_item;

pub use cart::{Cart, CartRecord};
pub use choice::ItemChoice;
pub use error::DomainError;
pub use favorite::{FavoriteLaundromat, FavoritesRegistry};
pub use id::{ItemId, LaundromatId, MenuId, StoreId};
pub use list::{Handle, OrderedList};
pub use money::{Price, Quantity};
pub use observer::{CartEvent, CartObserver, NullObserver, ObserverId, ObserverRegistry};
pub use order_item::{LineKey, OrderItem};
