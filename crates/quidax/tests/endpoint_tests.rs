/*
[INPUT]:  Mock HTTP responses shaped like Quidax envelopes
[OUTPUT]: Test results for endpoint methods end to end
[POS]:    Integration tests - endpoint round trips
[UPDATE]: When endpoints change
*/

mod common;

use common::{setup_mock_server, success_envelope, test_client, TEST_SECRET_KEY};
use quidax::{
    BlockingQuidaxClient, ClientConfig, Currency, CurrencyPair, NewBeneficiary, NewOrder,
    NewSubAccount, OrderSide, SortOrder,
};
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn withdrawal_fee_round_trip() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fee"))
        .and(query_param("currency", "btc"))
        .and(header("authorization", format!("Bearer {TEST_SECRET_KEY}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!({"fee": "0.0005", "type": "flat"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .withdrawal_fee(Currency::Btc)
        .await
        .expect("withdrawal_fee");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.message.as_deref(), Some("Successful"));
    assert_eq!(envelope.data.unwrap()["fee"], "0.0005");
}

#[tokio::test]
async fn create_sub_account_posts_profile_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "email": "sub@example.com",
            "first_name": "Ada",
            "last_name": "Obi",
            "phone_number": "+2348000000000",
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(success_envelope(json!({"id": "usr_123"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .create_sub_account(&NewSubAccount {
            email: "sub@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            phone_number: "+2348000000000".to_string(),
        })
        .await
        .expect("create_sub_account");

    assert_eq!(envelope.status_code, 201);
    assert_eq!(envelope.data.unwrap()["id"], "usr_123");
}

#[tokio::test]
async fn create_market_order_has_no_price_on_the_wire() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/users/me/orders"))
        .and(body_json(json!({
            "market": "btcngn",
            "side": "buy",
            "ord_type": "market",
            "volume": "0.5",
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(success_envelope(json!({"id": "ord_1"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let order = NewOrder::market(CurrencyPair::BtcNgn, OrderSide::Buy, Decimal::new(5, 1));
    client
        .create_order("me", &order)
        .await
        .expect("create_order");
}

#[tokio::test]
async fn instant_orders_list_skips_absent_filters() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users/me/instant_orders"))
        .and(query_param("order_by", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .instant_orders("me", None, None, SortOrder::Asc)
        .await
        .expect("instant_orders");
    assert_eq!(envelope.data, Some(json!([])));
}

#[tokio::test]
async fn beneficiary_create_and_fetch() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/users/me/beneficiaries"))
        .and(body_json(json!({
            "currency": "xrp",
            "uid": "rUocf1ix",
            "extra": "tag 1234",
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(success_envelope(json!({"id": "ben_1"}))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me/beneficiaries/ben_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_envelope(json!({"id": "ben_1"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .create_beneficiary(
            "me",
            &NewBeneficiary {
                currency: Currency::Xrp,
                uid: "rUocf1ix".to_string(),
                extra: "tag 1234".to_string(),
            },
        )
        .await
        .expect("create_beneficiary");
    let envelope = client.beneficiary("me", "ben_1").await.expect("beneficiary");
    assert!(envelope.is_success());
}

#[tokio::test]
async fn api_errors_come_back_as_envelopes() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users/me/wallets/btc"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": "error",
            "message": "Currency not supported",
            "data": null,
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .wallet("me", Currency::Btc)
        .await
        .expect("envelope, not error");
    assert_eq!(envelope.status_code, 422);
    assert_eq!(envelope.status.as_deref(), Some("error"));
    assert!(!envelope.is_success());
}

#[tokio::test]
async fn blocking_client_matches_async_behavior() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fee"))
        .and(query_param("currency", "eth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!({"fee": "0.003"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let envelope = tokio::task::spawn_blocking(move || {
        let client = BlockingQuidaxClient::with_config_and_base_url(
            Some(TEST_SECRET_KEY),
            ClientConfig::default(),
            &uri,
        )
        .expect("client init");
        client.withdrawal_fee(Currency::Eth)
    })
    .await
    .expect("join")
    .expect("withdrawal_fee");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.message.as_deref(), Some("Successful"));
}
