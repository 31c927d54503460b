use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Backend access errors.
///
/// Exactly one of these three kinds describes every failed request cycle, so
/// the rendering layer can offer different remediation guidance for "the
/// request never reached a server", "the server said no", and "the server
/// answered garbage".
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// The request never reached a server: connectivity, DNS, CORS.
    #[error("network error: {reason}")]
    Network { reason: String },

    /// The server responded with a failure status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Success status but the payload could not be parsed.
    #[error("decode error: {reason}")]
    Decode { reason: String },
}

/// The three access-failure kinds as plain data, for snapshots handed to the
/// rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AccessErrorKind {
    Network,
    Http,
    Decode,
}

impl AccessError {
    /// Which of the three kinds this error is.
    pub fn kind(&self) -> AccessErrorKind {
        match self {
            Self::Network { .. } => AccessErrorKind::Network,
            Self::Http { .. } => AccessErrorKind::Http,
            Self::Decode { .. } => AccessErrorKind::Decode,
        }
    }

    /// Whether the request never reached a server.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// The HTTP status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
