/*
[INPUT]:  HTTP configuration (base URL, timeouts, secret key)
[OUTPUT]: Configured async client and the shared request executor
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing executor behavior
*/

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

use crate::http::error::{QuidaxError, Result};
use crate::types::ApiResponse;

/// Default base endpoint for the Quidax REST API.
pub const DEFAULT_BASE_URL: &str = "https://www.quidax.com/api/v1";

/// Environment variable consulted when no secret key is passed explicitly.
pub const SECRET_KEY_ENV: &str = "QUIDAX_SECRET_KEY";

const USER_AGENT_VALUE: &str = concat!("quidax-rs/", env!("CARGO_PKG_VERSION"));

const SUPPORTED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
    Method::HEAD,
];

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// A fully described API request relative to the base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<Value>,
}

impl ApiRequest {
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: None,
        }
    }

    pub(crate) fn post_json<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub(crate) fn put_json<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self> {
        Ok(Self {
            method: Method::PUT,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Asynchronous client for the Quidax REST API.
///
/// Every endpoint method performs a single request/response round trip and
/// returns the normalized [`ApiResponse`] envelope.
#[derive(Debug, Clone)]
pub struct QuidaxClient {
    http: Client,
    base_url: String,
}

impl QuidaxClient {
    /// Create a client with default configuration. The secret key falls back
    /// to the `QUIDAX_SECRET_KEY` environment variable when not supplied.
    pub fn new(secret_key: Option<&str>) -> Result<Self> {
        Self::with_config(secret_key, ClientConfig::default())
    }

    /// Create a client with custom timeouts.
    pub fn with_config(secret_key: Option<&str>, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(secret_key, config, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (mock servers, staging).
    pub fn with_config_and_base_url(
        secret_key: Option<&str>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let token = resolve_secret_key(secret_key)?;
        Url::parse(base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(auth_headers(&token)?)
            .build()
            .map_err(QuidaxError::Http)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a raw API call against `path` (relative to the base URL).
    ///
    /// The body is omitted for GET and DELETE even when one is supplied.
    /// Useful for endpoints the SDK does not wrap yet; every wrapped endpoint
    /// goes through here as well.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        ensure_supported(&method)?;
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "dispatching request");
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            if method_carries_body(&method) {
                builder = builder.json(body);
            }
        }
        let response = builder.send().await.map_err(into_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(into_transport_error)?;
        let envelope = parse_envelope(status, &bytes)?;
        trace!(status_code = envelope.status_code, "parsed response envelope");
        Ok(envelope)
    }

    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.request(request.method.clone(), &request.path, request.body.as_ref())
            .await
    }
}

pub(crate) fn resolve_secret_key(explicit: Option<&str>) -> Result<String> {
    if let Some(key) = explicit
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }
    match std::env::var(SECRET_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(QuidaxError::MissingSecretKey),
    }
}

pub(crate) fn auth_headers(token: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| QuidaxError::InvalidParameter("secret key is not a valid header value".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    Ok(headers)
}

pub(crate) fn ensure_supported(method: &Method) -> Result<()> {
    if SUPPORTED_METHODS.contains(method) {
        Ok(())
    } else {
        Err(QuidaxError::UnsupportedMethod(method.clone()))
    }
}

pub(crate) fn method_carries_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::DELETE)
}

/// Connection failures and timeouts collapse into one category so callers
/// never match on reqwest's error type; everything else stays a plain
/// transport error.
pub(crate) fn into_transport_error(err: reqwest::Error) -> QuidaxError {
    if err.is_connect() || err.is_timeout() {
        QuidaxError::Connection(err)
    } else {
        QuidaxError::Http(err)
    }
}

/// Extract the envelope fields from a raw JSON body plus the transport status.
pub(crate) fn parse_envelope(status: StatusCode, body: &[u8]) -> Result<ApiResponse> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        QuidaxError::InvalidResponse(format!("response body is not valid JSON: {err}"))
    })?;
    Ok(ApiResponse {
        status_code: status.as_u16(),
        status: value
            .get("status")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned),
        message: value
            .get("message")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned),
        data: value.get("data").filter(|data| !data.is_null()).cloned(),
    })
}
