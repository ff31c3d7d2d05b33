//! Outbound adapters (driven side): implementations of the ports.
//!
//! - [`memory`] - In-memory cart and favorites store
//! - [`json`] - JSON file cart and favorites store
//! - [`payment`] - Offline payment gateway
//! - [`observer`] - Tracing-backed cart observer

pub mod json;
pub mod memory;
pub mod observer;
pub mod payment;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use observer::LogObserver;
pub use payment::OfflineGateway;
