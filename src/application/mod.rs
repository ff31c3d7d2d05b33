//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod favorites;
pub mod session;

pub use favorites::FavoritesService;
pub use session::{CartSession, SessionOptions};
