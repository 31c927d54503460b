//! # pulse-risk
//!
//! The risk intelligence layer: pure functions over already-fetched alert
//! and prediction collections. No I/O, no locks, no clocks.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`classify_risk`] | enhanced prediction + basic predictions | categorical [`RiskLevel`](pulse_core::RiskLevel) |
//! | [`risk_summary`] | same, plus client id | [`ClientRiskSummary`](pulse_core::ClientRiskSummary) |
//! | [`aggregate`] | alert + prediction collections | per-client [`ClientAggregate`](pulse_core::ClientAggregate) map |
//!
//! All three are total over well-typed input and deterministic; callers
//! validate upstream, the algorithms never handle malformed data
//! defensively.

pub mod aggregate;
pub mod classifier;

pub use aggregate::aggregate;
pub use classifier::{classify_risk, risk_score, risk_summary};
