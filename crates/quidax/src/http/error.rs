/*
[INPUT]:  Error sources (credentials, HTTP transport, serialization)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error type
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::Method;
use thiserror::Error;

use crate::http::client::SECRET_KEY_ENV;

/// Main error type for the Quidax SDK.
///
/// Note that non-2xx API responses are not errors; they come back as an
/// [`ApiResponse`](crate::types::ApiResponse) for the caller to inspect.
#[derive(Error, Debug)]
pub enum QuidaxError {
    /// No secret key was supplied and the environment variable is unset.
    #[error(
        "no secret key was provided; pass one on construction or set {SECRET_KEY_ENV}=<your-quidax-secret-key>"
    )]
    MissingSecretKey,

    /// The executor was handed an HTTP verb it does not support.
    #[error("{0} is not a supported HTTP method")]
    UnsupportedMethod(Method),

    /// The server could not be reached or did not respond in time.
    #[error("unable to connect to Quidax: {0}")]
    Connection(#[source] reqwest::Error),

    /// Any other transport failure.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// An argument failed a documented bound check.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Request-body serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl QuidaxError {
    /// Whether the error came from failing to reach the server at all.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, QuidaxError::Connection(_))
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, QuidaxError>;
