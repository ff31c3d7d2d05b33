//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the narrow boundaries the core calls through. Adapters
//! implement them to integrate with storage and payment processors.
//!
//! # Available Ports
//!
//! - [`CartStore`], [`FavoriteStore`] - Persistence for carts and favorites
//! - [`PaymentGateway`] - Client secrets for card payments
//!
//! Cart observers live in [`crate::domain::observer`] since they are part of
//! the cart's own contract rather than an external dependency.

mod payment;
mod store;

pub use payment::{CheckoutRequest, ClientSecret, PaymentGateway, PaymentIntent};
pub use store::{CartStore, FavoriteStore};
