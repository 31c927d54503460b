use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A managed client environment. Immutable reference data owned by the
/// backend; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Support tier label, e.g. `"enterprise"`.
    pub tier: String,
    /// Deployment environment label, e.g. `"production"`.
    pub environment: String,
    /// Systems whose failure pages the on-call immediately.
    pub critical_systems: Vec<String>,
    /// Human-readable business-hours window, e.g. `"09:00-17:00 ET"`.
    pub business_hours: String,
    /// system → systems that depend on it. Drives cascade visualizations.
    pub system_dependencies: HashMap<String, Vec<String>>,
}
