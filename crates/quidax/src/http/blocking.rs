/*
[INPUT]:  HTTP configuration (base URL, timeouts, secret key)
[OUTPUT]: Configured blocking client sharing the async executor's behavior
[POS]:    HTTP layer - synchronous client implementation
[UPDATE]: When the async executor's behavior changes; keep both in lockstep
*/

use reqwest::blocking::Client;
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, trace};

use crate::http::client::{
    ApiRequest, ClientConfig, DEFAULT_BASE_URL, auth_headers, ensure_supported,
    into_transport_error, method_carries_body, parse_envelope, resolve_secret_key,
};
use crate::http::error::{QuidaxError, Result};
use crate::types::ApiResponse;

/// Blocking client for the Quidax REST API.
///
/// Behaves identically to [`QuidaxClient`](crate::QuidaxClient); the only
/// difference is that calls block the current thread instead of suspending.
/// Cannot be used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingQuidaxClient {
    http: Client,
    base_url: String,
}

impl BlockingQuidaxClient {
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
    pub fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        ensure_supported(&method)?;
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "dispatching blocking request");
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            if method_carries_body(&method) {
                builder = builder.json(body);
            }
        }
        let response = builder.send().map_err(into_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().map_err(into_transport_error)?;
        let envelope = parse_envelope(status, &bytes)?;
        trace!(status_code = envelope.status_code, "parsed response envelope");
        Ok(envelope)
    }

    pub(crate) fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.request(request.method.clone(), &request.path, request.body.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_bytes, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn blocking_request_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/markets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message": "Successful",
                "data": [],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let envelope = tokio::task::spawn_blocking(move || {
            let client = BlockingQuidaxClient::with_config_and_base_url(
                Some("sk_test"),
                ClientConfig::default(),
                &uri,
            )
            .expect("client init");
            client.request(Method::GET, "/markets", None)
        })
        .await
        .expect("join")
        .expect("request");

        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.message.as_deref(), Some("Successful"));
        assert_eq!(envelope.data, Some(json!([])));
    }

    #[tokio::test]
    async fn blocking_get_drops_supplied_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(body_bytes(Vec::new()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": null,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        tokio::task::spawn_blocking(move || {
            let client = BlockingQuidaxClient::with_config_and_base_url(
                Some("sk_test"),
                ClientConfig::default(),
                &uri,
            )
            .expect("client init");
            let body = json!({"should": "be dropped"});
            client.request(Method::GET, "/users/me", Some(&body))
        })
        .await
        .expect("join")
        .expect("request");
    }

    #[tokio::test]
    async fn blocking_unsupported_method_is_rejected() {
        let err = tokio::task::spawn_blocking(|| {
            let client = BlockingQuidaxClient::new(Some("sk_test")).expect("client init");
            client.request(Method::TRACE, "/markets", None)
        })
        .await
        .expect("join")
        .unwrap_err();
        assert!(matches!(err, QuidaxError::UnsupportedMethod(_)));
    }
}
