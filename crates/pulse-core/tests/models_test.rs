use chrono::Utc;
use pulse_core::errors::AccessErrorKind;
use pulse_core::models::*;

fn sample_alert_json() -> serde_json::Value {
    serde_json::json!({
        "id": "alert-1",
        "clientId": "c1",
        "clientName": "Acme",
        "system": "payment-gateway",
        "severity": "critical",
        "message": "Connection pool nearing saturation",
        "timestamp": "2026-08-01T12:00:00Z",
        "cascadeRisk": 0.75,
        "category": "capacity",
        "isCorrelated": true,
        "correlatedWith": ["alert-2"]
    })
}

#[test]
fn alert_deserializes_from_the_backend_wire_format() {
    let alert: Alert = serde_json::from_value(sample_alert_json()).unwrap();
    assert_eq!(alert.client_id, "c1");
    assert_eq!(alert.severity, Severity::Critical);
    assert_eq!(alert.cascade_risk, 0.75);
    assert!(alert.is_correlated);
    assert_eq!(alert.correlated_with, vec!["alert-2"]);
}

#[test]
fn alert_round_trips_with_camel_case_field_names() {
    let alert: Alert = serde_json::from_value(sample_alert_json()).unwrap();
    let value = serde_json::to_value(&alert).unwrap();
    assert!(value.get("clientId").is_some());
    assert!(value.get("cascadeRisk").is_some());
    assert!(value.get("client_id").is_none());
}

#[test]
fn severity_and_risk_enums_serialize_lowercase() {
    assert_eq!(
        serde_json::to_value(Severity::Warning).unwrap(),
        serde_json::json!("warning")
    );
    assert_eq!(
        serde_json::to_value(RiskLevel::Critical).unwrap(),
        serde_json::json!("critical")
    );
    assert_eq!(
        serde_json::to_value(UrgencyLevel::Medium).unwrap(),
        serde_json::json!("medium")
    );
    assert_eq!(
        serde_json::to_value(RequestStatus::Loading).unwrap(),
        serde_json::json!("loading")
    );
}

#[test]
fn risk_level_displays_its_wire_name() {
    assert_eq!(RiskLevel::High.to_string(), "high");
    assert_eq!(RiskLevel::Low.as_str(), "low");
}

#[test]
fn prediction_deserializes_from_camel_case() {
    let prediction: Prediction = serde_json::from_value(serde_json::json!({
        "alertId": "alert-1",
        "clientId": "c1",
        "predictionConfidence": 0.9,
        "timeToCascadeMinutes": 5.0,
        "predictedCascadeSystems": ["checkout"],
        "patternMatched": "db-connection-exhaustion",
        "resolutionTimeMinutes": 45.0
    }))
    .unwrap();
    assert_eq!(prediction.prediction_confidence, 0.9);
    assert_eq!(prediction.predicted_cascade_systems, vec!["checkout"]);
}

#[test]
fn request_state_default_is_idle() {
    let state: RequestState<Vec<Prediction>> = RequestState::default();
    assert_eq!(state.status, RequestStatus::Idle);
    assert!(state.value.is_none());
    assert!(state.error.is_none());
}

#[test]
fn request_state_constructors_settle_correctly() {
    let loaded = RequestState::loaded(vec![1, 2, 3]);
    assert!(loaded.is_loaded());
    assert_eq!(loaded.value, Some(vec![1, 2, 3]));

    let loading: RequestState<()> = RequestState::loading();
    assert!(loading.is_loading());

    let failed: RequestState<()> = RequestState::failed(ErrorInfo {
        kind: AccessErrorKind::Network,
        message: "connection refused".to_string(),
        status: None,
    });
    assert_eq!(failed.status, RequestStatus::Error);
    assert!(failed.error.is_some());
}

#[test]
fn client_aggregate_starts_zeroed() {
    let aggregate = ClientAggregate::new("c1");
    assert_eq!(aggregate.client_id, "c1");
    assert_eq!(aggregate.total_alerts, 0);
    assert_eq!(aggregate.avg_cascade_risk, 0.0);
}

#[test]
fn client_parses_with_system_dependencies() {
    let client: Client = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Acme",
        "tier": "enterprise",
        "environment": "production",
        "criticalSystems": ["payment-gateway"],
        "businessHours": "09:00-17:00 ET",
        "systemDependencies": { "db": ["payment-gateway", "checkout"] }
    }))
    .unwrap();
    assert_eq!(client.system_dependencies["db"].len(), 2);
}

#[test]
fn enhanced_prediction_timestampless_fields_round_trip() {
    let enhanced = EnhancedPrediction {
        client_id: "c1".to_string(),
        urgency_level: UrgencyLevel::Critical,
        confidence: 0.9,
        predicted_in_minutes: 10.0,
        root_causes: vec!["pool saturation".to_string()],
        prevention_actions: vec!["scale the pool".to_string()],
        summary: "Saturation likely".to_string(),
        analysis_quality_flags: vec!["low-sample".to_string()],
    };
    let value = serde_json::to_value(&enhanced).unwrap();
    assert_eq!(value["urgencyLevel"], "critical");
    let back: EnhancedPrediction = serde_json::from_value(value).unwrap();
    assert_eq!(back, enhanced);
}

#[test]
fn alert_timestamp_uses_utc() {
    let alert: Alert = serde_json::from_value(sample_alert_json()).unwrap();
    assert!(alert.timestamp <= Utc::now());
}
