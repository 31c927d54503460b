//! # pulse-core
//!
//! Foundation crate for the Pulse dashboard data core.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::BackendConfig;
pub use errors::{AccessError, AccessErrorKind, PulseError, PulseResult};
pub use models::{
    Alert, Client, ClientAggregate, ClientRiskSummary, EnhancedPrediction, ErrorInfo, Prediction,
    RequestState, RequestStatus, RiskBasis, RiskLevel, Severity, UrgencyLevel,
};
