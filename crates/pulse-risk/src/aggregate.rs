//! Per-client statistics aggregation.
//!
//! Folds flat alert and prediction collections into one
//! [`ClientAggregate`] per distinct client id. Three passes: alerts seed
//! and count, predictions increment counts for clients that have an entry,
//! a final pass computes the cascade-risk mean.

use std::collections::HashMap;

use pulse_core::models::{Alert, ClientAggregate, Prediction, Severity};

/// Confidence above which a prediction counts as high-risk.
const HIGH_RISK_CONFIDENCE: f64 = 0.7;

/// Roll up alert and prediction collections into per-client aggregates.
///
/// Clients are discovered from the alerts pass; a prediction whose
/// `client_id` never appears in `alerts` is skipped rather than seeding an
/// entry of its own. `avg_cascade_risk` is 0.0 for a client with no alerts,
/// never a division by zero. Borrows its inputs and never mutates them;
/// calling twice with the same inputs yields identical output.
pub fn aggregate(alerts: &[Alert], predictions: &[Prediction]) -> HashMap<String, ClientAggregate> {
    let mut aggregates: HashMap<String, ClientAggregate> = HashMap::new();
    let mut cascade_risk_sums: HashMap<String, f64> = HashMap::new();

    for alert in alerts {
        let entry = aggregates
            .entry(alert.client_id.clone())
            .or_insert_with(|| ClientAggregate::new(&alert.client_id));
        entry.total_alerts += 1;
        match alert.severity {
            Severity::Critical => entry.critical_alerts += 1,
            Severity::Warning => entry.warning_alerts += 1,
            Severity::Info => {}
        }
        *cascade_risk_sums
            .entry(alert.client_id.clone())
            .or_insert(0.0) += alert.cascade_risk;
    }

    for prediction in predictions {
        // No aggregate entry means no alerts for this client; skip.
        if let Some(entry) = aggregates.get_mut(&prediction.client_id) {
            entry.prediction_count += 1;
            if prediction.prediction_confidence > HIGH_RISK_CONFIDENCE {
                entry.high_risk_prediction_count += 1;
            }
        }
    }

    for (client_id, entry) in aggregates.iter_mut() {
        if entry.total_alerts > 0 {
            let sum = cascade_risk_sums.get(client_id).copied().unwrap_or(0.0);
            entry.avg_cascade_risk = sum / entry.total_alerts as f64;
        }
    }

    aggregates
}
