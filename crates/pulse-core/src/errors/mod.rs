//! Error types for the Pulse data core.
//!
//! The access layer always fails with a typed [`AccessError`]; it never
//! substitutes a default value. The fetch orchestrator catches at the
//! per-key boundary and stores the failure as data, so one client's error
//! can never take down a sibling's request.

pub mod access_error;

pub use access_error::{AccessError, AccessErrorKind};

/// Top-level error for the Pulse data core.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error("backend access failed: {0}")]
    Access(#[from] AccessError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type PulseResult<T> = Result<T, PulseError>;

impl PulseError {
    /// The underlying access error, when this is an access failure.
    pub fn as_access(&self) -> Option<&AccessError> {
        match self {
            Self::Access(err) => Some(err),
            _ => None,
        }
    }
}
