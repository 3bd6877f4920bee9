//! Integration tests using WireMock
//!
//! These tests run the client against a mock HTTP server, covering the token
//! exchange, the refresh-once retry and the request bodies sent for each
//! operation.

mod customers;
mod orders;
mod products;
mod token_refresh;

use dotykacka_client::{DotykackaClient, RetryPolicy};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request, ResponseTemplate};

pub const CLOUD_ID: u64 = 42;
pub const BRANCH_ID: u64 = 7;
pub const REFRESH_TOKEN: &str = "refresh-token";
pub const TOKEN_PATH: &str = "/v2/signin/token";

pub fn products_path() -> String {
    format!("/v2/clouds/{CLOUD_ID}/products")
}

pub fn customers_path() -> String {
    format!("/v2/clouds/{CLOUD_ID}/customers")
}

pub fn pos_actions_path() -> String {
    format!("/v2/clouds/{CLOUD_ID}/branches/{BRANCH_ID}/pos-actions")
}

/// Matcher for a valid token exchange request.
pub fn token_request() -> MockBuilder {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Authorization", format!("User {REFRESH_TOKEN}").as_str()))
        .and(body_json(json!({ "_cloudId": CLOUD_ID })))
}

/// Answers every token exchange with `token`.
pub async fn mount_token(server: &MockServer, token: &str) {
    token_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": token })))
        .mount(server)
        .await;
}

/// Matcher for an API call carrying `token`.
pub fn authorized(http_method: &str, api_path: &str, token: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(api_path))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
}

pub fn client(server: &MockServer) -> DotykackaClient {
    client_with_policy(server, RetryPolicy::default())
}

pub fn client_with_policy(server: &MockServer, policy: RetryPolicy) -> DotykackaClient {
    DotykackaClient::builder()
        .cloud_id(CLOUD_ID)
        .branch_id(BRANCH_ID)
        .refresh_token(REFRESH_TOKEN)
        .base_url(server.uri())
        .retry_policy(policy)
        .build()
        .expect("Failed to build client")
}

/// Requests received on `api_path`.
pub async fn requests_to(server: &MockServer, api_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == api_path)
        .collect()
}
