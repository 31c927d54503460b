use pulse_core::models::{EnhancedPrediction, Prediction, RiskBasis, RiskLevel, UrgencyLevel};
use pulse_risk::{classify_risk, risk_score, risk_summary};

fn make_prediction(confidence: f64, time_to_cascade_minutes: f64) -> Prediction {
    Prediction {
        alert_id: "alert-1".to_string(),
        client_id: "c1".to_string(),
        prediction_confidence: confidence,
        time_to_cascade_minutes,
        predicted_cascade_systems: vec!["payment-gateway".to_string()],
        pattern_matched: "db-connection-exhaustion".to_string(),
        resolution_time_minutes: 45.0,
    }
}

fn make_enhanced(urgency: UrgencyLevel, confidence: f64) -> EnhancedPrediction {
    EnhancedPrediction {
        client_id: "c1".to_string(),
        urgency_level: urgency,
        confidence,
        predicted_in_minutes: 12.0,
        root_causes: vec!["connection pool saturation".to_string()],
        prevention_actions: vec!["scale the pool".to_string()],
        summary: "Pool saturation likely within 12 minutes".to_string(),
        analysis_quality_flags: vec![],
    }
}

// ── Enhanced path ─────────────────────────────────────────────────────────

#[test]
fn enhanced_critical_above_gate_is_critical() {
    let enhanced = make_enhanced(UrgencyLevel::Critical, 0.85);
    assert_eq!(classify_risk(Some(&enhanced), &[]), RiskLevel::Critical);
}

#[test]
fn enhanced_critical_below_gate_is_low() {
    let enhanced = make_enhanced(UrgencyLevel::Critical, 0.75);
    assert_eq!(classify_risk(Some(&enhanced), &[]), RiskLevel::Low);
}

#[test]
fn enhanced_high_confidence_gate_is_strict() {
    // 0.65 and exactly 0.70 both fail the > 0.7 gate; 0.71 passes.
    let below = make_enhanced(UrgencyLevel::High, 0.65);
    assert_eq!(classify_risk(Some(&below), &[]), RiskLevel::Low);

    let at = make_enhanced(UrgencyLevel::High, 0.70);
    assert_eq!(classify_risk(Some(&at), &[]), RiskLevel::Low);

    let above = make_enhanced(UrgencyLevel::High, 0.71);
    assert_eq!(classify_risk(Some(&above), &[]), RiskLevel::High);
}

#[test]
fn enhanced_medium_above_gate_is_medium() {
    let enhanced = make_enhanced(UrgencyLevel::Medium, 0.61);
    assert_eq!(classify_risk(Some(&enhanced), &[]), RiskLevel::Medium);
}

#[test]
fn enhanced_low_urgency_is_low_regardless_of_confidence() {
    let enhanced = make_enhanced(UrgencyLevel::Low, 0.99);
    assert_eq!(classify_risk(Some(&enhanced), &[]), RiskLevel::Low);
}

#[test]
fn enhanced_supersedes_basic_predictions() {
    // Basic predictions alone would classify critical; the low-confidence
    // enhanced result wins anyway.
    let basic = vec![make_prediction(0.9, 5.0), make_prediction(0.8, 8.0)];
    let enhanced = make_enhanced(UrgencyLevel::Low, 0.5);
    assert_eq!(classify_risk(Some(&enhanced), &basic), RiskLevel::Low);
}

// ── Basic path ────────────────────────────────────────────────────────────

#[test]
fn two_critical_like_predictions_classify_critical() {
    let basic = vec![make_prediction(0.9, 5.0), make_prediction(0.8, 8.0)];
    assert_eq!(classify_risk(None, &basic), RiskLevel::Critical);
}

#[test]
fn one_critical_like_prediction_classifies_high() {
    let basic = vec![make_prediction(0.8, 8.0), make_prediction(0.3, 120.0)];
    assert_eq!(classify_risk(None, &basic), RiskLevel::High);
}

#[test]
fn distant_low_confidence_prediction_classifies_low() {
    // risk_score = 0.5 / 100 = 0.005, well under every threshold.
    let basic = vec![make_prediction(0.5, 100.0)];
    assert_eq!(classify_risk(None, &basic), RiskLevel::Low);
}

#[test]
fn max_risk_thresholds_are_strict() {
    // confidence 0.6 at 4 minutes: score 0.15 exactly, which is not > 0.15,
    // so it stays high (0.15 > 0.08).
    let at_critical = vec![make_prediction(0.6, 4.0)];
    assert_eq!(classify_risk(None, &at_critical), RiskLevel::High);

    // score 0.16 crosses the critical threshold.
    let above_critical = vec![make_prediction(0.64, 4.0)];
    assert_eq!(classify_risk(None, &above_critical), RiskLevel::Critical);

    // score 0.05 sits between 0.04 and 0.08: medium.
    let medium = vec![make_prediction(0.5, 10.0)];
    assert_eq!(classify_risk(None, &medium), RiskLevel::Medium);
}

#[test]
fn zero_time_to_cascade_clamps_to_one_minute() {
    // Without the clamp this would divide by zero; with it the score is
    // exactly the confidence.
    let p = make_prediction(0.9, 0.0);
    assert_eq!(risk_score(&p), 0.9);
    assert_eq!(classify_risk(None, &[p]), RiskLevel::Critical);
}

#[test]
fn negative_time_to_cascade_clamps_to_one_minute() {
    let p = make_prediction(0.05, -30.0);
    assert_eq!(risk_score(&p), 0.05);
    assert_eq!(classify_risk(None, &[p]), RiskLevel::Medium);
}

#[test]
fn no_data_classifies_low() {
    assert_eq!(classify_risk(None, &[]), RiskLevel::Low);
}

// ── Summary ───────────────────────────────────────────────────────────────

#[test]
fn summary_basis_is_enhanced_whenever_enhanced_exists() {
    let basic = vec![make_prediction(0.9, 5.0)];
    let enhanced = make_enhanced(UrgencyLevel::Critical, 0.9);

    let summary = risk_summary("c1", Some(&enhanced), &basic);
    assert_eq!(summary.basis, RiskBasis::Enhanced);
    assert_eq!(summary.risk_level, RiskLevel::Critical);
    // prediction_count still reflects the basic collection.
    assert_eq!(summary.prediction_count, 1);
}

#[test]
fn summary_basis_is_basic_without_enhanced() {
    let basic = vec![make_prediction(0.5, 100.0)];
    let summary = risk_summary("c1", None, &basic);
    assert_eq!(summary.basis, RiskBasis::Basic);
    assert_eq!(summary.prediction_count, 1);
}

#[test]
fn summary_basis_is_none_without_any_data() {
    let summary = risk_summary("c1", None, &[]);
    assert_eq!(summary.basis, RiskBasis::None);
    assert_eq!(summary.risk_level, RiskLevel::Low);
    assert_eq!(summary.prediction_count, 0);
}
