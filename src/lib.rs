//! Basin - cart, order and favorites core for a laundromat ordering service.
//!
//! # Architecture
//!
//! - [`domain`] - Storage-agnostic logic: the arena-backed [`domain::OrderedList`],
//!   the [`domain::Cart`] with its observers, and the favorites registry
//! - [`port`] - Traits the application depends on: cart and favorites
//!   stores, the payment gateway
//! - [`adapter`] - The `basin` CLI plus in-memory, JSON file and offline
//!   payment implementations of the ports
//! - [`application`] - Cart sessions with persistence and two-phase checkout,
//!   and the favorites service
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use basin::domain::{Cart, ItemId, MenuId, OrderItem, StoreId};
//! use rust_decimal_macros::dec;
//!
//! let mut cart = Cart::new(StoreId::new("stuy"), "Stuyvesant Wash");
//! let wash = OrderItem::new(ItemId::new(1), "wash", MenuId::new(1), "Wash", dec!(2.50));
//!
//! cart.add_item(wash.clone());
//! cart.add_item(wash.clone());
//!
//! assert_eq!(cart.total_count_for(&wash), 2);
//! assert_eq!(cart.subtotal(), Ok(dec!(5.00)));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
