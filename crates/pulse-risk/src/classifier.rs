//! Risk classification: one categorical urgency level per client.
//!
//! Two paths, in strict precedence order:
//! - An enhanced prediction, when present, is gated on its own confidence
//!   and supersedes everything else.
//! - Otherwise the basic predictions are scored numerically and classified
//!   against fixed thresholds.
//!
//! The threshold constants were chosen empirically upstream; they are
//! preserved verbatim for compatibility, not re-derived.

use pulse_core::models::{
    ClientRiskSummary, EnhancedPrediction, Prediction, RiskBasis, RiskLevel, UrgencyLevel,
};

/// Confidence an enhanced critical urgency must exceed to classify critical.
const ENHANCED_CRITICAL_CONFIDENCE: f64 = 0.8;

/// Confidence an enhanced high urgency must exceed to classify high.
const ENHANCED_HIGH_CONFIDENCE: f64 = 0.7;

/// Confidence an enhanced medium urgency must exceed to classify medium.
const ENHANCED_MEDIUM_CONFIDENCE: f64 = 0.6;

/// Max risk score above which the basic path classifies critical.
const BASIC_CRITICAL_MAX_RISK: f64 = 0.15;

/// Max risk score above which the basic path classifies high.
const BASIC_HIGH_MAX_RISK: f64 = 0.08;

/// Max risk score above which the basic path classifies medium.
const BASIC_MEDIUM_MAX_RISK: f64 = 0.04;

/// Confidence a basic prediction must exceed to count as critical-like.
const CRITICAL_LIKE_CONFIDENCE: f64 = 0.7;

/// Time-to-cascade a basic prediction must be under to count as critical-like.
const CRITICAL_LIKE_MINUTES: f64 = 10.0;

/// Numeric risk score of one basic prediction: confidence scaled by the
/// inverse of the time remaining before the cascade.
///
/// `time_to_cascade_minutes` is clamped to 1 before dividing, so a zero or
/// negative value can neither divide by zero nor inflate the score.
pub fn risk_score(prediction: &Prediction) -> f64 {
    prediction.prediction_confidence * (1.0 / prediction.time_to_cascade_minutes.max(1.0))
}

/// Classify one client's current risk level.
///
/// When `enhanced` is present it is authoritative, whatever basic
/// predictions are also given. Total over its input domain: no panics, no
/// side effects, deterministic.
pub fn classify_risk(enhanced: Option<&EnhancedPrediction>, basic: &[Prediction]) -> RiskLevel {
    if let Some(enhanced) = enhanced {
        return classify_enhanced(enhanced);
    }

    if basic.is_empty() {
        return RiskLevel::Low;
    }

    let mut max_risk = 0.0f64;
    let mut critical_count = 0usize;
    for prediction in basic {
        max_risk = max_risk.max(risk_score(prediction));
        if prediction.prediction_confidence > CRITICAL_LIKE_CONFIDENCE
            && prediction.time_to_cascade_minutes < CRITICAL_LIKE_MINUTES
        {
            critical_count += 1;
        }
    }

    if critical_count >= 2 || max_risk > BASIC_CRITICAL_MAX_RISK {
        RiskLevel::Critical
    } else if critical_count >= 1 || max_risk > BASIC_HIGH_MAX_RISK {
        RiskLevel::High
    } else if max_risk > BASIC_MEDIUM_MAX_RISK {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Gate an enhanced prediction's urgency on its confidence.
///
/// The comparisons are strict: confidence exactly at a gate falls through
/// to low.
fn classify_enhanced(enhanced: &EnhancedPrediction) -> RiskLevel {
    match enhanced.urgency_level {
        UrgencyLevel::Critical if enhanced.confidence > ENHANCED_CRITICAL_CONFIDENCE => {
            RiskLevel::Critical
        }
        UrgencyLevel::High if enhanced.confidence > ENHANCED_HIGH_CONFIDENCE => RiskLevel::High,
        UrgencyLevel::Medium if enhanced.confidence > ENHANCED_MEDIUM_CONFIDENCE => {
            RiskLevel::Medium
        }
        _ => RiskLevel::Low,
    }
}

/// Classification plus provenance, for list rows and badges.
///
/// `basis` is `Enhanced` whenever an enhanced prediction exists for the
/// client, regardless of basic predictions present. `prediction_count`
/// counts basic predictions only.
pub fn risk_summary(
    client_id: &str,
    enhanced: Option<&EnhancedPrediction>,
    basic: &[Prediction],
) -> ClientRiskSummary {
    let basis = if enhanced.is_some() {
        RiskBasis::Enhanced
    } else if !basic.is_empty() {
        RiskBasis::Basic
    } else {
        RiskBasis::None
    };

    ClientRiskSummary {
        client_id: client_id.to_string(),
        risk_level: classify_risk(enhanced, basic),
        prediction_count: basic.len(),
        basis,
    }
}
