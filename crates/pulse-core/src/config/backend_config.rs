use serde::{Deserialize, Serialize};

use super::defaults;

/// Backend connection configuration.
///
/// An instance of this injected at runtime is the highest-priority source in
/// the transport resolver's chain; it is re-read on every resolution so a
/// swap takes effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base address override, e.g. `https://ops-backend.example.com/api`.
    /// `None` falls through to the build-time / hostname sources.
    pub base_url: Option<String>,
    /// Per-request timeout (seconds).
    pub timeout_secs: u64,
    /// Connection establishment timeout (seconds).
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: defaults::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Config with a base address override and default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }
}
