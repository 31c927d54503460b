//! Backend base-address resolution.
//!
//! One accessor, [`resolve_base_url`], with an explicit priority chain:
//!
//! 1. Runtime-injected [`BackendConfig`] (set via [`configure`], re-read on
//!    every call so a swap takes effect immediately).
//! 2. Build-time `PULSE_API_URL`.
//! 3. Hostname heuristic: a production dashboard host derives its backend
//!    counterpart by token substitution.
//! 4. Local-loopback fallback for development.
//!
//! Sources 2–4 resolve once per process and are cached; the runtime
//! override always wins when present. Every address that leaves this
//! module has passed [`enforce_https`]: a non-loopback host never keeps an
//! `http` scheme. Only this module mutates the runtime configuration and
//! the resolution cache.

use std::sync::{OnceLock, RwLock};

use url::Url;

use pulse_core::config::BackendConfig;
use pulse_core::constants::{
    BACKEND_HOST_TOKEN, FRONTEND_HOST_TOKEN, LOCAL_FALLBACK_BASE_URL, LOOPBACK_HOSTS,
    PRODUCTION_HOST_SUFFIX,
};

/// Runtime-injected configuration, highest-priority source in the chain.
static RUNTIME_CONFIG: RwLock<Option<BackendConfig>> = RwLock::new(None);

/// Resolution of the static sources (build-time env, hostname heuristic,
/// loopback fallback), computed once per process.
static STATIC_BASE_URL: OnceLock<String> = OnceLock::new();

/// Inject or replace the runtime configuration.
pub fn configure(config: BackendConfig) {
    if let Ok(mut guard) = RUNTIME_CONFIG.write() {
        tracing::info!("resolver: runtime configuration injected");
        *guard = Some(config);
    }
}

/// Remove the runtime configuration, falling back to the static chain.
pub fn clear_configuration() {
    if let Ok(mut guard) = RUNTIME_CONFIG.write() {
        *guard = None;
    }
}

/// Snapshot of the current runtime configuration, when one is injected.
pub fn runtime_config() -> Option<BackendConfig> {
    RUNTIME_CONFIG.read().ok().and_then(|guard| guard.clone())
}

/// Resolve the backend base address through the priority chain.
///
/// An unparsable candidate is logged and the chain falls through to the
/// next source rather than failing the caller.
pub fn resolve_base_url() -> String {
    if let Some(raw) = runtime_config().and_then(|config| config.base_url) {
        match enforce_https(&raw) {
            Some(secure) => return secure,
            None => {
                tracing::warn!("resolver: unparsable runtime base url {raw:?}, falling through");
            }
        }
    }

    STATIC_BASE_URL.get_or_init(resolve_static).clone()
}

/// Resolve the static sources (2–4). Called at most once per process.
fn resolve_static() -> String {
    if let Some(raw) = option_env!("PULSE_API_URL") {
        match enforce_https(raw) {
            Some(secure) => {
                tracing::debug!("resolver: using build-time base url");
                return secure;
            }
            None => {
                tracing::warn!("resolver: unparsable build-time base url {raw:?}, falling through");
            }
        }
    }

    if let Ok(host) = std::env::var("HOSTNAME") {
        if let Some(derived) = derive_backend_base(&host) {
            tracing::debug!("resolver: derived backend base from hostname {host:?}");
            return derived;
        }
    }

    tracing::debug!("resolver: using local development fallback");
    LOCAL_FALLBACK_BASE_URL.to_string()
}

/// Derive the backend base address from a production dashboard hostname.
///
/// Matches hosts on the managed platform (`*.run.app`) containing the
/// `frontend` token; the first occurrence is substituted with `backend`.
/// Returns `None` for any other host.
pub fn derive_backend_base(host: &str) -> Option<String> {
    if host.ends_with(PRODUCTION_HOST_SUFFIX) && host.contains(FRONTEND_HOST_TOKEN) {
        let backend_host = host.replacen(FRONTEND_HOST_TOKEN, BACKEND_HOST_TOKEN, 1);
        Some(format!("https://{backend_host}/api"))
    } else {
        None
    }
}

/// Rewrite an `http` address to `https` unless its host is loopback.
///
/// Returns `None` when the candidate does not parse as an absolute URL.
/// Loopback addresses are left untouched; everything else leaves here with
/// the secure scheme.
pub fn enforce_https(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw).ok()?;
    if url.scheme() == "http" {
        let host = url.host_str()?;
        if !is_loopback(host) {
            // set_scheme only fails for incompatible scheme pairs;
            // http -> https is always allowed.
            let _ = url.set_scheme("https");
        }
    }
    Some(url.to_string())
}

fn is_loopback(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    LOOPBACK_HOSTS.contains(&host)
}
