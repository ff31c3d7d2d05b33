//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for catalog items, choices and IDs.
//! - [`observer`] - `RecordingObserver` collecting cart events.
//! - [`gateway`] - `ScriptedGateway` payment double.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod gateway;
pub mod observer;
