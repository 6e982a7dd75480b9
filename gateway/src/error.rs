//! Gateway construction errors.
//!
//! Request-time failures are [`wall::acquire::AcquireError`]s; these cover
//! only building a gateway from configuration.

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP provider was selected without an endpoint.
    #[error("missing gateway URL: env var {var} not set")]
    MissingUrl { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}
