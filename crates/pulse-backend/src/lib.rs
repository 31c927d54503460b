//! # pulse-backend
//!
//! The resilient access layer: backend address resolution with an enforced
//! secure scheme, a request cycle that classifies every failure, and a
//! fetch orchestrator that deduplicates in-flight calls per client.
//!
//! Layering, leaves first:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`transport::resolver`] | base address priority chain + https upgrade |
//! | [`transport::client`] | one request/response cycle, one-hop redirect, error taxonomy |
//! | [`endpoints`] | backend path contract + the [`BackendApi`] seam |
//! | [`orchestrator`] | keyed request state, dedup, fan-out, refresh |

pub mod endpoints;
pub mod orchestrator;
pub mod transport;

pub use endpoints::BackendApi;
pub use orchestrator::FetchOrchestrator;
pub use transport::client::BackendClient;
pub use transport::resolver::{clear_configuration, configure, resolve_base_url};
