//! FetchOrchestrator — keyed request state, in-flight dedup, batch
//! fan-out with bulkhead isolation, explicit refresh.
//!
//! Two load tiers per client: cheap basic predictions, fetched eagerly for
//! the whole fleet, and the expensive enhanced prediction, fetched lazily
//! one client at a time. The orchestrator is the only writer of the state
//! maps; the rendering layer reads snapshots.

use std::collections::HashMap;

use dashmap::DashMap;
use futures::future::join_all;

use pulse_core::errors::PulseError;
use pulse_core::models::{
    Client, EnhancedPrediction, ErrorInfo, Prediction, RequestState, RequestStatus,
};

use crate::endpoints::BackendApi;

/// Outcome of the synchronous check-and-set that starts a request.
enum Begin<T> {
    /// The key was idle or errored; this caller owns the fetch.
    Started,
    /// The key is already loading or loaded; no new call is issued.
    Snapshot(RequestState<T>),
}

/// Per-client fetch orchestration over a [`BackendApi`].
///
/// A key's transition out of `Idle` happens under the map's entry lock,
/// before the asynchronous call begins and with no await while the lock is
/// held, so two near-simultaneous triggers can never both observe idle and
/// double-fire. The terminal state is written on success and failure
/// alike. Errors stop here: they are stored per key, never propagated.
pub struct FetchOrchestrator<A: BackendApi> {
    api: A,
    basic: DashMap<String, RequestState<Vec<Prediction>>>,
    enhanced: DashMap<String, RequestState<EnhancedPrediction>>,
}

impl<A: BackendApi> FetchOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            basic: DashMap::new(),
            enhanced: DashMap::new(),
        }
    }

    /// Eagerly load basic predictions for every client, one concurrent
    /// request each.
    ///
    /// Bulkhead isolation: a failing client lands in `Error` state and
    /// contributes an empty collection to the returned map; its siblings
    /// are unaffected and the batch itself never fails. Keys already
    /// loading or loaded are not re-fetched.
    pub async fn load_basic_for_all(
        &self,
        clients: &[Client],
    ) -> HashMap<String, Vec<Prediction>> {
        let fetches = clients.iter().map(|client| self.load_basic(&client.id));
        let states = join_all(fetches).await;

        clients
            .iter()
            .zip(states)
            .map(|(client, state)| (client.id.clone(), state.value.unwrap_or_default()))
            .collect()
    }

    /// Load basic predictions for one client, deduplicating in-flight
    /// calls and reusing a loaded value until refresh.
    pub async fn load_basic(&self, client_id: &str) -> RequestState<Vec<Prediction>> {
        match Self::begin(&self.basic, client_id) {
            Begin::Snapshot(state) => state,
            Begin::Started => {
                let settled = match self.api.predictions_for_client(client_id).await {
                    Ok(predictions) => RequestState::loaded(predictions),
                    Err(e) => Self::settle_error("basic predictions", client_id, &e),
                };
                self.basic.insert(client_id.to_string(), settled.clone());
                settled
            }
        }
    }

    /// Load the enhanced prediction for one client.
    ///
    /// Returns the cached state when already loaded; returns the current
    /// snapshot without a second call when a fetch is in flight.
    pub async fn load_enhanced(&self, client_id: &str) -> RequestState<EnhancedPrediction> {
        match Self::begin(&self.enhanced, client_id) {
            Begin::Snapshot(state) => state,
            Begin::Started => {
                let settled = match self.api.enhanced_prediction(client_id).await {
                    Ok(prediction) => RequestState::loaded(prediction),
                    Err(e) => Self::settle_error("enhanced prediction", client_id, &e),
                };
                self.enhanced.insert(client_id.to_string(), settled.clone());
                settled
            }
        }
    }

    /// Reset one client's keys — or every key — back to lazy idle,
    /// forcing a re-fetch on next access.
    ///
    /// A request already in flight for a removed key still completes and
    /// writes its own settled state; the rendering layer decides whether
    /// that state is stale.
    pub fn refresh(&self, client_id: Option<&str>) {
        match client_id {
            Some(id) => {
                self.basic.remove(id);
                self.enhanced.remove(id);
                tracing::debug!("orchestrator: refreshed {id}");
            }
            None => {
                self.basic.clear();
                self.enhanced.clear();
                tracing::debug!("orchestrator: refreshed all keys");
            }
        }
    }

    /// Snapshot of one client's basic-tier state; idle when never fetched.
    pub fn basic_state(&self, client_id: &str) -> RequestState<Vec<Prediction>> {
        self.basic
            .get(client_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Snapshot of one client's enhanced-tier state; idle when never fetched.
    pub fn enhanced_state(&self, client_id: &str) -> RequestState<EnhancedPrediction> {
        self.enhanced
            .get(client_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Full basic-tier snapshot for the rendering layer.
    pub fn basic_states(&self) -> HashMap<String, RequestState<Vec<Prediction>>> {
        self.basic
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Full enhanced-tier snapshot for the rendering layer.
    pub fn enhanced_states(&self) -> HashMap<String, RequestState<EnhancedPrediction>> {
        self.enhanced
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Synchronous check-and-set of the in-flight guard.
    ///
    /// Runs entirely under the entry lock: observe loading/loaded and
    /// snapshot, or claim the key by writing `Loading`. The lock is
    /// released before any await.
    fn begin<T: Clone>(map: &DashMap<String, RequestState<T>>, key: &str) -> Begin<T> {
        let mut entry = map.entry(key.to_string()).or_default();
        match entry.status {
            RequestStatus::Loading | RequestStatus::Loaded => {
                Begin::Snapshot(entry.value().clone())
            }
            RequestStatus::Idle | RequestStatus::Error => {
                *entry = RequestState::loading();
                Begin::Started
            }
        }
    }

    fn settle_error<T>(what: &str, client_id: &str, error: &PulseError) -> RequestState<T> {
        tracing::warn!("orchestrator: {what} for {client_id} failed: {error}");
        RequestState::failed(ErrorInfo::from(error))
    }
}
