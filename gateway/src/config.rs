//! Gateway configuration parsed from environment variables.

use tracing::warn;

use crate::error::GatewayError;

pub const PROVIDER_VAR: &str = "WALLBOARD_GATEWAY_PROVIDER";
pub const URL_VAR: &str = "WALLBOARD_GATEWAY_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "WALLBOARD_GATEWAY_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "WALLBOARD_GATEWAY_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayProviderKind {
    /// POST prompts to a routing endpoint.
    Http,
    /// Resolve locally to placeholder images.
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for GatewayTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub provider: GatewayProviderKind,
    /// Routing endpoint. Always `Some` for [`GatewayProviderKind::Http`].
    pub url: Option<String>,
    pub timeouts: GatewayTimeouts,
}

impl GatewayConfig {
    /// Build typed gateway config from environment variables.
    ///
    /// - `WALLBOARD_GATEWAY_PROVIDER`: `http` or `mock`. Absent means `http`
    ///   when a URL is set, otherwise `mock`.
    /// - `WALLBOARD_GATEWAY_URL`: routing endpoint, required for `http`
    /// - `WALLBOARD_GATEWAY_REQUEST_TIMEOUT_SECS`: default 60
    /// - `WALLBOARD_GATEWAY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ConfigParse`] for an unknown provider and
    /// [`GatewayError::MissingUrl`] when `http` is requested without a URL.
    pub fn from_env() -> Result<Self, GatewayError> {
        let url = std::env::var(URL_VAR).ok().map(|u| u.trim().to_owned()).filter(|u| !u.is_empty());
        let provider = parse_provider(std::env::var(PROVIDER_VAR).ok().as_deref(), url.is_some())?;
        if provider == GatewayProviderKind::Http && url.is_none() {
            return Err(GatewayError::MissingUrl { var: URL_VAR.into() });
        }
        let timeouts = GatewayTimeouts {
            request_secs: env_parse_u64(REQUEST_TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64(CONNECT_TIMEOUT_VAR, DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { provider, url, timeouts })
    }

    /// Config for the mock provider with default timeouts.
    #[must_use]
    pub fn mock() -> Self {
        Self { provider: GatewayProviderKind::Mock, url: None, timeouts: GatewayTimeouts::default() }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.parse::<u64>() {
        Ok(v) => v,
        Err(e) => {
            warn!(%key, %raw, error = %e, "gateway: ignoring unparsable timeout");
            default
        }
    }
}

fn parse_provider(raw: Option<&str>, has_url: bool) -> Result<GatewayProviderKind, GatewayError> {
    match raw.map(str::trim) {
        Some("http") => Ok(GatewayProviderKind::Http),
        Some("mock") => Ok(GatewayProviderKind::Mock),
        Some(other) => Err(GatewayError::ConfigParse(format!("unknown {PROVIDER_VAR}: {other}"))),
        None if has_url => Ok(GatewayProviderKind::Http),
        None => {
            warn!("gateway: {URL_VAR} not set, falling back to mock images");
            Ok(GatewayProviderKind::Mock)
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
