//! Inbound adapters that drive the application.

pub mod cli;
