//! Derived per-client summaries. Recomputed on demand, never persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;

/// Which inputs a risk summary was classified from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RiskBasis {
    /// An enhanced prediction existed; it supersedes any basic predictions.
    Enhanced,
    /// Only basic predictions existed.
    Basic,
    /// No prediction data at all.
    None,
}

/// A client's current classified risk, for list rows and badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientRiskSummary {
    pub client_id: String,
    pub risk_level: RiskLevel,
    /// Number of basic predictions considered.
    pub prediction_count: usize,
    pub basis: RiskBasis,
}

/// Rolled-up alert/prediction counts for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientAggregate {
    pub client_id: String,
    pub total_alerts: usize,
    pub critical_alerts: usize,
    pub warning_alerts: usize,
    pub prediction_count: usize,
    /// Predictions with confidence above the high-risk threshold (0.7).
    pub high_risk_prediction_count: usize,
    /// Arithmetic mean of `cascade_risk` over this client's alerts;
    /// 0.0 when the client has no alerts.
    pub avg_cascade_risk: f64,
}

impl ClientAggregate {
    /// Fresh zeroed entry for a client.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            total_alerts: 0,
            critical_alerts: 0,
            warning_alerts: 0,
            prediction_count: 0,
            high_risk_prediction_count: 0,
            avg_cascade_risk: 0.0,
        }
    }
}
