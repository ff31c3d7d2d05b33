//! Adapters: the CLI driving the application and the implementations of
//! the ports in [`crate::port`].

pub mod inbound;
pub mod outbound;
