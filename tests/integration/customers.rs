//! Integration tests for customers

use super::*;
use dotykacka_client::services::CustomersService;
use dotykacka_client::{CustomerInput, DotykackaError, NewCustomer};

#[tokio::test]
async fn test_create_customers() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("POST", &customers_path(), "access-1")
        .and(body_json(json!([{
            "_cloudId": CLOUD_ID,
            "display": true,
            "flags": 0,
            "firstName": "Jana",
            "lastName": "Novakova",
            "email": "jana@example.com"
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 77,
            "_cloudId": CLOUD_ID,
            "firstName": "Jana",
            "lastName": "Novakova",
            "email": "jana@example.com"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let created = client
        .customers()
        .create(vec![NewCustomer::new(CLOUD_ID, "Jana", "Novakova")
            .with_email("jana@example.com")
            .into()])
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, Some(77));
    assert_eq!(created[0].email.as_deref(), Some("jana@example.com"));
}

#[tokio::test]
async fn test_create_customers_validates_batch_size() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(customers_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);

    let empty = client.customers().create(Vec::new()).await.unwrap_err();
    let oversized: Vec<CustomerInput> = (0..100)
        .map(|i| NewCustomer::new(CLOUD_ID, format!("Guest {i}"), "Walk-in").into())
        .collect();
    let too_many = client.customers().create(oversized).await.unwrap_err();

    assert!(matches!(empty, DotykackaError::Validation { .. }));
    assert!(matches!(too_many, DotykackaError::Validation { .. }));
}

#[tokio::test]
async fn test_create_customers_surfaces_non_bad_request_errors() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(customers_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client
        .customers()
        .create(vec![NewCustomer::new(CLOUD_ID, "Jana", "Novakova").into()])
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!err.to_string().contains("internal"));
}

#[tokio::test]
async fn test_get_customer() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("GET", &format!("{}/77", customers_path()), "access-1")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 77,
            "firstName": "Jana",
            "points": 120.0
        })))
        .mount(&server)
        .await;

    let client = client(&server);

    let customer = client.customers().get(77).await.unwrap().unwrap();

    assert_eq!(customer.first_name.as_deref(), Some("Jana"));
    assert_eq!(customer.points, Some(120.0));
}

#[tokio::test]
async fn test_list_customers_bad_request_is_error() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("GET"))
        .and(path(customers_path()))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"bad filter"}"#))
        .mount(&server)
        .await;

    let client = client(&server);

    let result = client.customers().list().await;

    match result {
        Err(DotykackaError::Api { status, body, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(body.as_deref(), Some(r#"{"error":"bad filter"}"#));
        }
        other => panic!("Expected HTTP 400 error, got {other:?}"),
    }
}
