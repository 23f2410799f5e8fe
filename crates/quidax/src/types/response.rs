/*
[INPUT]:  Raw JSON bodies and transport status codes
[OUTPUT]: Normalized response envelope returned by every endpoint method
[POS]:    Data layer - the single result shape of the SDK
[UPDATE]: When Quidax changes its response envelope
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized response returned by every call against the Quidax API.
///
/// Non-2xx responses are not surfaced as errors; inspect `status_code`
/// and `status` to tell success from failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Transport-level HTTP status code.
    pub status_code: u16,
    /// The `status` field of the response body, usually `"success"` or `"error"`.
    pub status: Option<String>,
    /// The `message` field of the response body.
    pub message: Option<String>,
    /// The `data` field of the response body, untyped JSON. `null` maps to `None`.
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Whether the API reported success (2xx status code and a `"success"` status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
            && self.status.as_deref().is_none_or(|s| s == "success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_2xx_and_success_status() {
        let ok = ApiResponse {
            status_code: 200,
            status: Some("success".to_string()),
            message: Some("Successful".to_string()),
            data: None,
        };
        assert!(ok.is_success());

        let rejected = ApiResponse {
            status_code: 422,
            status: Some("error".to_string()),
            message: Some("Invalid currency".to_string()),
            data: None,
        };
        assert!(!rejected.is_success());

        let error_status = ApiResponse {
            status: Some("error".to_string()),
            ..ok
        };
        assert!(!error_status.is_success());
    }
}
