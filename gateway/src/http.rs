//! HTTP image gateway.
//!
//! Thin `reqwest` wrapper that POSTs `{"prompt": ...}` to a routing endpoint.
//! Status and body classification lives in [`parse_generate_response`] so it
//! can be tested without a server.

use std::time::Duration;

use tracing::{debug, warn};
use wall::acquire::{AcquireError, AcquiredImage, ImageGateway};

use crate::config::GatewayTimeouts;
use crate::error::GatewayError;

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpGateway {
    http: reqwest::Client,
    url: String,
}

impl HttpGateway {
    /// Build a client for `url` bounded by `timeouts`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::HttpClientBuild`] if the client fails to build.
    pub fn new(url: String, timeouts: GatewayTimeouts) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ImageGateway for HttpGateway {
    async fn generate(&self, prompt: &str) -> Result<AcquiredImage, AcquireError> {
        let response = self
            .http
            .post(&self.url)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %self.url, "gateway: request failed");
                AcquireError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            warn!(error = %e, status, "gateway: body read failed");
            AcquireError::Network(e.to_string())
        })?;
        debug!(status, bytes = text.len(), "gateway: response received");

        parse_generate_response(status, &text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Classify a gateway response.
///
/// - body not JSON: [`AcquireError::InvalidResponse`]
/// - 2xx with `{url, prompt, id}`: the image
/// - non-2xx with `{"error": msg}`: [`AcquireError::Upstream`] carrying `msg`
/// - non-2xx otherwise: [`AcquireError::Upstream`] naming the status
///
/// # Errors
///
/// As listed above.
pub fn parse_generate_response(status: u16, body: &str) -> Result<AcquiredImage, AcquireError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AcquireError::InvalidResponse(e.to_string()))?;

    if (200..300).contains(&status) {
        return serde_json::from_value(value).map_err(|e| AcquireError::InvalidResponse(e.to_string()));
    }

    let message = serde_json::from_value::<ErrorBody>(value)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Image generation failed (status {status})"));
    Err(AcquireError::Upstream(message))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
