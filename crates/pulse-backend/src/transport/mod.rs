//! Backend transport: address resolution and the resilient request cycle.

pub mod client;
pub mod resolver;

pub use client::BackendClient;
