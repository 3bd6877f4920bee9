//! Integration tests for order pos-actions

use super::*;
use dotykacka_client::services::OrdersService;
use dotykacka_client::{AddOrderItems, Order, OrderItem, OrderUpdate};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_cancel_order_body() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("POST", &pos_actions_path(), "access-1")
        .and(body_json(json!({ "action": "order/cancel", "order-id": 12345 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 12345 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let response = client.orders().cancel(12345).await.unwrap();

    assert_eq!(response, json!({ "id": 12345 }));
}

#[tokio::test]
async fn test_create_order_body() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("POST", &pos_actions_path(), "access-1")
        .and(body_json(json!({
            "action": "order/create",
            "customer-id": 77,
            "note": "Table by the window",
            "items": [
                { "id": 1001, "qty": 2.0 },
                { "id": 1002, "qty": 1.0, "note": "no sugar" }
            ],
            "lock": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 900 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let order = Order {
        customer_id: Some(77),
        note: Some("Table by the window".to_string()),
        lock: true,
        ..Order::new(vec![
            OrderItem::new(1001, 2.0),
            OrderItem {
                note: Some("no sugar".to_string()),
                ..OrderItem::new(1002, 1.0)
            },
        ])
    };

    let response = client.orders().create(order).await.unwrap();

    assert_eq!(response["id"], 900);
}

#[tokio::test]
async fn test_update_order_injects_order_id() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("POST", &pos_actions_path(), "access-1")
        .and(body_json(json!({
            "action": "order/update",
            "order-id": 900,
            "discount-percent": 20.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let update = OrderUpdate {
        discount_percent: Some(20.0),
        ..Default::default()
    };

    client.orders().update(900, update).await.unwrap();
}

#[tokio::test]
async fn test_add_items_body() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1").await;

    authorized("POST", &pos_actions_path(), "access-1")
        .and(body_json(json!({
            "action": "order/add-item",
            "order-id": 900,
            "items": [{ "id": 1003, "qty": 1.0 }],
            "lock": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    client
        .orders()
        .add_items(
            900,
            AddOrderItems {
                items: vec![OrderItem::new(1003, 1.0)],
                lock: false,
            },
        )
        .await
        .unwrap();
}
