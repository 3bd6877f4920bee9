//! Integration tests for the access token lifecycle

use super::*;
use dotykacka_client::services::{OrdersService, ProductsService};
use dotykacka_client::{DotykackaError, NewProduct, RetryTrigger};
use secrecy::ExposeSecret;

#[tokio::test]
async fn test_rejected_initial_token_is_refreshed() {
    let server = MockServer::start().await;

    token_request()
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_token(&server, "access-2").await;

    authorized("GET", &products_path(), "access-2")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 1, "name": "Coffee" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let page = client.products().list().await.unwrap().unwrap();

    assert_eq!(page.data[0].name, "Coffee");
    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 2);
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_call_retried() {
    let server = MockServer::start().await;

    token_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "stale" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_token(&server, "fresh").await;

    authorized("POST", &pos_actions_path(), "stale")
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    authorized("POST", &pos_actions_path(), "fresh")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let response = client.orders().cancel(1).await.unwrap();

    assert_eq!(response["id"], 1);
    let snapshot = client.metrics().snapshot();
    assert_eq!(snapshot.token_fetches, 2);
    assert_eq!(snapshot.token_refreshes, 1);
    assert_eq!(snapshot.retried_calls, 1);
    assert_eq!(snapshot.failed_calls, 0);
}

#[tokio::test]
async fn test_never_more_than_one_retry() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(products_path()))
        .respond_with(ResponseTemplate::new(502))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client
        .products()
        .create(vec![NewProduct::new("Coffee", 3, 50.0, 21.0).into()])
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 2);
}

#[tokio::test]
async fn test_unusable_refresh_token_is_auth_error() {
    let server = MockServer::start().await;

    token_request()
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid refresh token"))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(products_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client.products().list().await.unwrap_err();

    match err {
        DotykackaError::Auth { message } => {
            assert!(message.contains(&CLOUD_ID.to_string()));
            assert!(message.contains("invalid refresh token"));
        }
        other => panic!("Expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_is_reused_across_calls() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("GET", &products_path(), "access-1")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server);

    for _ in 0..3 {
        client.products().list().await.unwrap().unwrap();
    }

    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 1);
}

#[tokio::test]
async fn test_auth_only_trigger_skips_retry_on_server_error() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(pos_actions_path()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_policy(
        &server,
        RetryPolicy::default().with_trigger(RetryTrigger::AuthFailureOnly),
    );

    let err = client.orders().cancel(5).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 1);
}

#[tokio::test]
async fn test_access_token_fetches_fresh_token() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    let client = client(&server);

    let token = client.access_token().await.unwrap();

    assert_eq!(token.secret().expose_secret(), "access-1");
    assert_eq!(token.cloud_id(), CLOUD_ID);
}
