//! Backend endpoint contract.
//!
//! Path strings are owned by the backend and preserved verbatim here; the
//! core builds them but does not define them. [`BackendApi`] is the seam
//! the orchestrator is generic over, so tests can drive it with a mock.

use async_trait::async_trait;

use pulse_core::errors::PulseResult;
use pulse_core::models::{Alert, EnhancedPrediction, Prediction};

use crate::transport::client::BackendClient;

/// All alerts across the fleet.
pub const ALERTS_PATH: &str = "/alerts/";

/// Alerts for one client.
pub fn client_alerts_path(client_id: &str) -> String {
    format!("/alerts/client/{client_id}")
}

/// Basic predictions for one client.
pub fn client_predictions_path(client_id: &str) -> String {
    format!("/predictions/client/{client_id}")
}

/// Enhanced prediction simulation for one client.
pub fn enhanced_prediction_path(client_id: &str) -> String {
    format!("/agent/enhanced/prediction/simulate?client_id={client_id}")
}

/// The four backend calls the dashboard core makes.
///
/// [`BackendClient`] is the production implementation; the orchestrator is
/// generic over this trait so tests substitute a mock with call spies.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// All alerts across the fleet.
    async fn alerts(&self) -> PulseResult<Vec<Alert>>;

    /// Alerts for one client.
    async fn alerts_for_client(&self, client_id: &str) -> PulseResult<Vec<Alert>>;

    /// Basic predictions for one client.
    async fn predictions_for_client(&self, client_id: &str) -> PulseResult<Vec<Prediction>>;

    /// Run the enhanced prediction agent for one client.
    async fn enhanced_prediction(&self, client_id: &str) -> PulseResult<EnhancedPrediction>;
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn alerts(&self) -> PulseResult<Vec<Alert>> {
        self.get(ALERTS_PATH).await
    }

    async fn alerts_for_client(&self, client_id: &str) -> PulseResult<Vec<Alert>> {
        self.get(&client_alerts_path(client_id)).await
    }

    async fn predictions_for_client(&self, client_id: &str) -> PulseResult<Vec<Prediction>> {
        self.get(&client_predictions_path(client_id)).await
    }

    async fn enhanced_prediction(&self, client_id: &str) -> PulseResult<EnhancedPrediction> {
        self.post(&enhanced_prediction_path(client_id), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_backend_contract() {
        assert_eq!(ALERTS_PATH, "/alerts/");
        assert_eq!(client_alerts_path("c1"), "/alerts/client/c1");
        assert_eq!(client_predictions_path("c1"), "/predictions/client/c1");
        assert_eq!(
            enhanced_prediction_path("c1"),
            "/agent/enhanced/prediction/simulate?client_id=c1"
        );
    }
}
