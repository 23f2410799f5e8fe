/*
[INPUT]:  Credential sources and client configuration
[OUTPUT]: Test results for client construction and credential resolution
[POS]:    Integration tests - client lifecycle
[UPDATE]: When construction or credential resolution changes
*/

use quidax::{BlockingQuidaxClient, ClientConfig, DEFAULT_BASE_URL, QuidaxClient, QuidaxError, SECRET_KEY_ENV};
use tokio_test::assert_ok;

// All credential/env cases live in this one test; the rest of the suite
// passes explicit keys so nothing here races with other tests.
#[test]
fn secret_key_resolution_order() {
    unsafe { std::env::remove_var(SECRET_KEY_ENV) };

    // No key anywhere is fatal at construction.
    let err = QuidaxClient::new(None).unwrap_err();
    assert!(matches!(err, QuidaxError::MissingSecretKey));
    let err = BlockingQuidaxClient::new(None).unwrap_err();
    assert!(matches!(err, QuidaxError::MissingSecretKey));

    // An empty explicit key does not count.
    let err = QuidaxClient::new(Some("")).unwrap_err();
    assert!(matches!(err, QuidaxError::MissingSecretKey));

    // An explicit key satisfies construction.
    assert_ok!(QuidaxClient::new(Some("sk_explicit")));

    // So does the environment variable.
    unsafe { std::env::set_var(SECRET_KEY_ENV, "sk_from_env") };
    assert_ok!(QuidaxClient::new(None));
    assert_ok!(BlockingQuidaxClient::new(None));
    unsafe { std::env::remove_var(SECRET_KEY_ENV) };
}

#[test]
fn default_base_url_is_versioned() {
    let client = assert_ok!(QuidaxClient::new(Some("sk_test")));
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(DEFAULT_BASE_URL, "https://www.quidax.com/api/v1");
}

#[test]
fn custom_base_url_is_normalized() {
    let client = assert_ok!(QuidaxClient::with_config_and_base_url(
        Some("sk_test"),
        ClientConfig::default(),
        "http://localhost:8080/",
    ));
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = QuidaxClient::with_config_and_base_url(
        Some("sk_test"),
        ClientConfig::default(),
        "not a url",
    )
    .unwrap_err();
    assert!(matches!(err, QuidaxError::UrlParse(_)));
}
