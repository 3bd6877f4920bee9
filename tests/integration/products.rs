//! Integration tests for products

use super::*;
use dotykacka_client::services::ProductsService;
use dotykacka_client::{DotykackaError, NewProduct, PageNumber, Product, ProductInput};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[tokio::test]
async fn test_create_coffee() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("POST", &products_path(), "access-1")
        .and(body_json(json!([{
            "_categoryId": 3,
            "deleted": false,
            "discountPercent": 0.0,
            "discountPermitted": true,
            "display": true,
            "flags": 0,
            "hexColor": "#000000",
            "name": "Coffee",
            "onSale": true,
            "packaging": 1.0,
            "points": 0.0,
            "priceWithoutVat": 50.0,
            "requiresPriceEntry": false,
            "stockDeduct": false,
            "unit": "Piece",
            "vat": 21.0
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1001,
            "_cloudId": CLOUD_ID,
            "name": "Coffee",
            "priceWithoutVat": 50.0,
            "vat": 21.0
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let created = client
        .products()
        .create(vec![NewProduct::new("Coffee", 3, 50.0, 21.0).into()])
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Coffee");
    assert_eq!(created[0].id, Some(1001));
}

#[tokio::test]
async fn test_create_empty_batch_sends_nothing() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(products_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client.products().create(vec![]).await.unwrap_err();

    assert!(matches!(err, DotykackaError::Validation { .. }));
}

#[test_case(100 ; "limit")]
#[test_case(150 ; "over limit")]
#[tokio::test]
async fn test_create_oversized_batch_sends_nothing(size: usize) {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(products_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let batch: Vec<ProductInput> = (0..size)
        .map(|i| {
            Product {
                name: format!("Item {i}"),
                ..Default::default()
            }
            .into()
        })
        .collect();

    let err = client.products().create(batch).await.unwrap_err();

    assert!(matches!(err, DotykackaError::Validation { .. }));
}

#[tokio::test]
async fn test_list_products_keeps_pagination_as_received() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("GET", &products_path(), "access-1")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "currentPage": "2",
            "perPage": "100",
            "totalItemsOnPage": "1",
            "totalItemsCount": "101",
            "firstPage": "1",
            "lastPage": "2",
            "nextPage": null,
            "prevPage": "1",
            "data": [{ "id": 5, "name": "Tea", "unit": "Piece" }]
        })))
        .mount(&server)
        .await;

    let client = client(&server);

    let page = client.products().list().await.unwrap().unwrap();

    assert_eq!(page.current_page, Some(PageNumber::Text("2".to_string())));
    assert_eq!(page.total_items_count.as_ref().and_then(PageNumber::as_u64), Some(101));
    assert_eq!(page.next_page, None);
    assert_eq!(page.prev_page.as_ref().and_then(PageNumber::as_u64), Some(1));
    assert_eq!(page.data[0].name, "Tea");
}

#[tokio::test]
async fn test_get_product_bad_request_embeds_body() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("GET"))
        .and(path(format!("{}/9", products_path())))
        .respond_with(ResponseTemplate::new(400).set_body_string("Product id must be numeric"))
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client.products().get(9).await.unwrap_err();

    assert!(err.is_bad_request());
    assert_eq!(
        err.to_string(),
        "API error (HTTP 400): Error fetching products. Product id must be numeric"
    );
}

#[test_case(404 ; "not found")]
#[test_case(500 ; "server error")]
#[test_case(503 ; "unavailable")]
#[tokio::test]
async fn test_get_product_other_failures_return_none(status: u16) {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("GET"))
        .and(path(format!("{}/9", products_path())))
        .respond_with(ResponseTemplate::new(status).set_body_string("failure details"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);

    assert_eq!(client.products().get(9).await.unwrap(), None);
}

#[tokio::test]
async fn test_list_products_with_unparseable_body_returns_none() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    Mock::given(method("GET"))
        .and(path(products_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client(&server);

    assert!(client.products().list().await.unwrap().is_none());
}
