/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for the quidax SDK tests.

use quidax::{ClientConfig, QuidaxClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_SECRET_KEY: &str = "sk_test_0000";

/// Setup a mock HTTP server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Async client pointed at a mock server.
pub fn test_client(server: &MockServer) -> QuidaxClient {
    QuidaxClient::with_config_and_base_url(
        Some(TEST_SECRET_KEY),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// A canonical success envelope body.
pub fn success_envelope(data: Value) -> Value {
    json!({
        "status": "success",
        "message": "Successful",
        "data": data,
    })
}
