//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`OrderItem`], [`ItemChoice`] and
//! the ID newtypes so tests focus on assertions rather than construction
//! boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Cart, ItemChoice, ItemId, LaundromatId, MenuId, OrderItem, Quantity, StoreId};

/// Create an item on menu 1 with a count of one.
pub fn item(id: u64, category: &str, price: Decimal) -> OrderItem {
    OrderItem::new(
        ItemId::new(id),
        category,
        MenuId::new(1),
        format!("{category} #{id}"),
        price,
    )
}

/// Create an item with an explicit menu and count.
///
/// Counts above [`Quantity::MAX`] are clamped.
pub fn item_with(id: u64, category: &str, menu: u64, price: Decimal, count: u32) -> OrderItem {
    OrderItem::new(
        ItemId::new(id),
        category,
        MenuId::new(menu),
        format!("{category} #{id}"),
        price,
    )
    .with_count(Quantity::clamped(count, Quantity::MAX))
}

/// A required, unselected choice with no surcharge.
pub fn required_choice(name: &str) -> ItemChoice {
    ItemChoice::new(name).required()
}

/// An optional choice with a surcharge, selected.
pub fn selected_add_on(name: &str, price: Decimal) -> ItemChoice {
    ItemChoice::new(name).with_price(price).selected()
}

/// Create an empty cart for store `id`.
pub fn cart(id: &str) -> Cart {
    Cart::new(StoreId::new(id), format!("Store {id}"))
}

/// Create a [`LaundromatId`] from a string.
pub fn laundromat(id: &str) -> LaundromatId {
    LaundromatId::new(id)
}
