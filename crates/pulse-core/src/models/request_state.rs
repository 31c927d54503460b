//! Per-key request lifecycle state, owned by the fetch orchestrator and
//! consumed read-only by the rendering layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{AccessError, AccessErrorKind, PulseError};

/// Lifecycle of one keyed request.
///
/// `Loading` doubles as the in-flight guard: the orchestrator never issues a
/// second call for a key in this status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// A failed request, flattened to plain data for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub kind: AccessErrorKind,
    pub message: String,
    /// HTTP status, when the server responded at all.
    pub status: Option<u16>,
}

impl From<&AccessError> for ErrorInfo {
    fn from(err: &AccessError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            status: err.status(),
        }
    }
}

impl From<&PulseError> for ErrorInfo {
    fn from(err: &PulseError) -> Self {
        match err {
            PulseError::Access(access) => Self::from(access),
            // A request body that fails to serialize never left the process;
            // surface it under the decode kind rather than inventing a fourth.
            PulseError::Serialization(e) => Self {
                kind: AccessErrorKind::Decode,
                message: e.to_string(),
                status: None,
            },
        }
    }
}

/// State of one request slot: status plus the cached value or retained error.
///
/// A slot is created lazily on first request, mutated only by the
/// orchestrator, and holds its `Loaded` value until an explicit refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RequestState<T> {
    pub status: RequestStatus,
    pub value: Option<T>,
    pub error: Option<ErrorInfo>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> RequestState<T> {
    /// Untouched slot: nothing requested yet.
    pub fn idle() -> Self {
        Self {
            status: RequestStatus::Idle,
            value: None,
            error: None,
        }
    }

    /// In-flight slot. Any previously cached value is gone by the time the
    /// orchestrator re-enters loading (refresh resets to idle first).
    pub fn loading() -> Self {
        Self {
            status: RequestStatus::Loading,
            value: None,
            error: None,
        }
    }

    /// Settled successfully; value cached until refresh.
    pub fn loaded(value: T) -> Self {
        Self {
            status: RequestStatus::Loaded,
            value: Some(value),
            error: None,
        }
    }

    /// Settled with a failure; the error is retained so the rendering layer
    /// can offer a retry affordance.
    pub fn failed(error: ErrorInfo) -> Self {
        Self {
            status: RequestStatus::Error,
            value: None,
            error: Some(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn is_loaded(&self) -> bool {
        self.status == RequestStatus::Loaded
    }
}
