use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Alert severity as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// A single alert raised against one of a client's systems.
///
/// Correlation (`is_correlated` / `correlated_with`) is informational, not
/// ownership: a correlated alert still stands on its own in every count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    /// The system the alert fired on, e.g. `"payment-gateway"`.
    pub system: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Probability in `[0, 1]` that this alert cascades to dependent systems.
    pub cascade_risk: f64,
    pub category: String,
    pub is_correlated: bool,
    /// Ids of alerts this one correlates with.
    pub correlated_with: Vec<String>,
}
