//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p pulse-core export_bindings
//! Generated files appear in pulse-core/bindings/*.ts
//!
//! CI should run this and then `git diff --exit-code` to catch drift.

#[test]
fn export_bindings() {
    // ts-rs generates .ts files automatically for every type with
    // #[ts(export)] when `cargo test` runs; this test validates that every
    // rendering-layer type is importable and TS-derivable.
    use pulse_core::errors::AccessErrorKind;
    use pulse_core::models::{
        Alert, Client, ClientAggregate, ClientRiskSummary, EnhancedPrediction, ErrorInfo,
        Prediction, RequestState, RequestStatus, RiskBasis, RiskLevel, Severity, UrgencyLevel,
    };

    let _ = std::any::type_name::<Client>();
    let _ = std::any::type_name::<Alert>();
    let _ = std::any::type_name::<Severity>();
    let _ = std::any::type_name::<Prediction>();
    let _ = std::any::type_name::<EnhancedPrediction>();
    let _ = std::any::type_name::<UrgencyLevel>();
    let _ = std::any::type_name::<RiskLevel>();
    let _ = std::any::type_name::<RiskBasis>();
    let _ = std::any::type_name::<ClientRiskSummary>();
    let _ = std::any::type_name::<ClientAggregate>();
    let _ = std::any::type_name::<RequestStatus>();
    let _ = std::any::type_name::<RequestState<Prediction>>();
    let _ = std::any::type_name::<ErrorInfo>();
    let _ = std::any::type_name::<AccessErrorKind>();
}
