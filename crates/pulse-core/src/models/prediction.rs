use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A basic cascade prediction, produced by the backend per alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// The alert this prediction was computed for.
    pub alert_id: String,
    pub client_id: String,
    /// Model confidence in `[0, 1]`.
    pub prediction_confidence: f64,
    /// Estimated minutes until the cascade starts. Non-negative by contract;
    /// the classifier clamps to 1 before dividing either way.
    pub time_to_cascade_minutes: f64,
    /// Systems expected to be swept up in the cascade.
    pub predicted_cascade_systems: Vec<String>,
    /// Name of the historical pattern the model matched.
    pub pattern_matched: String,
    /// Estimated minutes to resolve once the cascade starts.
    pub resolution_time_minutes: f64,
}

/// Urgency assigned by the enhanced analysis agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

/// A richer per-client prediction from the enhanced analysis agent.
///
/// When one of these exists for a client it supersedes the basic
/// per-prediction classification entirely, whatever basic predictions are
/// also present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPrediction {
    pub client_id: String,
    pub urgency_level: UrgencyLevel,
    /// Agent confidence in `[0, 1]`.
    pub confidence: f64,
    /// Minutes until the predicted incident.
    pub predicted_in_minutes: f64,
    pub root_causes: Vec<String>,
    pub prevention_actions: Vec<String>,
    /// Prose summary for the dashboard detail panel.
    pub summary: String,
    /// Flags the agent raised about its own analysis quality.
    pub analysis_quality_flags: Vec<String>,
}
