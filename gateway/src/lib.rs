//! Gateway: concrete image acquisition for the wall.
//!
//! DESIGN
//! ======
//! The wall depends only on [`wall::acquire::ImageGateway`]. This crate
//! supplies the implementations and picks one from environment variables:
//! an HTTP client for a routing endpoint, or a mock that returns placeholder
//! images. [`Gateway`] dispatches to whichever was configured. It also
//! provides [`local_file::LocalFile`], the on-disk [`wall::acquire::UploadSource`].

pub mod config;
pub mod error;
pub mod http;
pub mod local_file;
pub mod mock;

use config::{GatewayConfig, GatewayProviderKind};
pub use error::GatewayError;
use tracing::info;
use wall::acquire::{AcquireError, AcquiredImage, ImageGateway};

// =============================================================================
// GATEWAY DISPATCH
// =============================================================================

/// Concrete image gateway that dispatches to the configured provider.
///
/// Configured from environment variables by [`Gateway::from_env`].
pub struct Gateway {
    inner: GatewayProvider,
}

enum GatewayProvider {
    Http(http::HttpGateway),
    Mock(mock::MockGateway),
}

impl Gateway {
    /// Build a gateway from environment variables. See
    /// [`GatewayConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client fails.
    pub fn from_env() -> Result<Self, GatewayError> {
        let config = GatewayConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a gateway from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if `http` lacks a URL or the HTTP client fails to build.
    pub fn from_config(config: GatewayConfig) -> Result<Self, GatewayError> {
        let inner = match config.provider {
            GatewayProviderKind::Http => {
                let url = config.url.ok_or_else(|| GatewayError::MissingUrl { var: config::URL_VAR.into() })?;
                info!(%url, "gateway: http provider");
                GatewayProvider::Http(http::HttpGateway::new(url, config.timeouts)?)
            }
            GatewayProviderKind::Mock => {
                info!("gateway: mock provider");
                GatewayProvider::Mock(mock::MockGateway::new())
            }
        };
        Ok(Self { inner })
    }

    /// Which provider this gateway dispatches to.
    #[must_use]
    pub fn provider(&self) -> GatewayProviderKind {
        match self.inner {
            GatewayProvider::Http(_) => GatewayProviderKind::Http,
            GatewayProvider::Mock(_) => GatewayProviderKind::Mock,
        }
    }
}

#[async_trait::async_trait]
impl ImageGateway for Gateway {
    async fn generate(&self, prompt: &str) -> Result<AcquiredImage, AcquireError> {
        match &self.inner {
            GatewayProvider::Http(g) => g.generate(prompt).await,
            GatewayProvider::Mock(g) => g.generate(prompt).await,
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
