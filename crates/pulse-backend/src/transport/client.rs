//! One logical request/response cycle against the resolved backend.
//!
//! The underlying client never follows redirects on its own
//! (`Policy::none()`): a redirect-class response is followed manually,
//! exactly once, so the https upgrade is re-applied to the target before
//! the second hop. Every failure is one of the three [`AccessError`]
//! kinds; this layer never substitutes a default value.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, LOCATION};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use pulse_core::config::BackendConfig;
use pulse_core::errors::{AccessError, PulseResult};

use super::resolver;

/// Placeholder stored when a failure response's body cannot be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

/// HTTP client for the analytics backend.
///
/// Cheap to clone (the inner `reqwest::Client` is an `Arc`). The base
/// address is re-resolved on every request, never cached across calls, so
/// a runtime configuration swap takes effect immediately.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
}

impl BackendClient {
    /// Client with timeouts from the runtime configuration, or defaults.
    pub fn new() -> PulseResult<Self> {
        let config = resolver::runtime_config().unwrap_or_default();
        Self::with_config(&config)
    }

    /// Client with explicit timeouts.
    pub fn with_config(config: &BackendConfig) -> PulseResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AccessError::Network {
                reason: format!("failed to build http client: {e}"),
            })?;
        Ok(Self { http })
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> PulseResult<T> {
        self.request(Method::GET, path, None, None).await
    }

    /// POST with an optional JSON body, decoding a JSON response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> PulseResult<T> {
        self.request(Method::POST, path, body, None).await
    }

    /// Execute one logical request cycle.
    ///
    /// Resolves the base address, joins `path`, applies the final https
    /// guard, sends, follows at most one redirect, and classifies the
    /// outcome into the three-kind error taxonomy.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> PulseResult<T> {
        let request_id = Uuid::new_v4();
        let url = Self::request_url(path)?;
        let merged = Self::merge_headers(headers);

        tracing::debug!("backend: {request_id} {method} {url}");
        let mut response = self
            .send_once(method.clone(), &url, body, &merged, &request_id)
            .await?;

        if response.status().is_redirection() {
            let target = Self::redirect_target(&response, &url)?;
            tracing::debug!("backend: {request_id} following redirect to {target}");
            response = self
                .send_once(method, &target, body, &merged, &request_id)
                .await?;
            if response.status().is_redirection() {
                return Err(AccessError::Http {
                    status: response.status().as_u16(),
                    body: "redirect chain longer than one hop".to_string(),
                }
                .into());
            }
        }

        Self::decode(response, &request_id).await
    }

    /// Join the resolved base with a relative path and apply the final
    /// https guard right before the transport call.
    fn request_url(path: &str) -> Result<String, AccessError> {
        let base = resolver::resolve_base_url();
        let joined = format!("{}{path}", base.trim_end_matches('/'));
        resolver::enforce_https(&joined).ok_or_else(|| AccessError::Network {
            reason: format!("invalid request url: {joined}"),
        })
    }

    /// Default JSON content type, overridden by any caller-supplied headers.
    fn merge_headers(caller: Option<HeaderMap>) -> HeaderMap {
        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = caller {
            merged.extend(extra);
        }
        merged
    }

    /// Send one request; a failure here means no response was received.
    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
        headers: &HeaderMap,
        request_id: &Uuid,
    ) -> Result<Response, AccessError> {
        let mut builder = self.http.request(method, url).headers(headers.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.send().await.map_err(|e| {
            tracing::warn!("backend: {request_id} no response from {url}: {e}");
            AccessError::Network {
                reason: e.to_string(),
            }
        })
    }

    /// Resolve a redirect's target against the request URL, re-applying
    /// the https upgrade to the hop.
    fn redirect_target(response: &Response, from: &str) -> Result<String, AccessError> {
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AccessError::Http {
                status,
                body: "redirect without a Location header".to_string(),
            })?;

        Self::join_redirect(from, location).ok_or_else(|| AccessError::Http {
            status,
            body: format!("unresolvable redirect target: {location}"),
        })
    }

    /// Resolve a redirect location against the request URL, re-applying
    /// the https upgrade to the hop.
    fn join_redirect(from: &str, location: &str) -> Option<String> {
        let base = Url::parse(from).ok()?;
        let target = base.join(location).ok()?;
        resolver::enforce_https(target.as_str())
    }

    /// Classify the settled response and decode its JSON payload.
    async fn decode<T: DeserializeOwned>(response: Response, request_id: &Uuid) -> PulseResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            tracing::warn!("backend: {request_id} failed with HTTP {status}");
            return Err(AccessError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().await.map_err(|e| AccessError::Decode {
            reason: format!("failed to read response body: {e}"),
        })?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("backend: {request_id} returned an unparsable payload");
            AccessError::Decode {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
