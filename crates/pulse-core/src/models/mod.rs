//! Data model shared between the backend wire format, the risk layer, and
//! the rendering layer.
//!
//! Every type here is plain data: `serde` for the backend's camelCase JSON
//! contract, `ts-rs` so the TypeScript rendering layer gets matching
//! declarations. Nothing in this module performs I/O or holds locks.

pub mod aggregate;
pub mod alert;
pub mod client;
pub mod prediction;
pub mod request_state;
pub mod risk;

pub use aggregate::{ClientAggregate, ClientRiskSummary, RiskBasis};
pub use alert::{Alert, Severity};
pub use client::Client;
pub use prediction::{EnhancedPrediction, Prediction, UrgencyLevel};
pub use request_state::{ErrorInfo, RequestState, RequestStatus};
pub use risk::RiskLevel;
