//! HTTP tests for order assembly and order reads

#[macro_use]
mod common;

use actix_web::test;
use ec_api::create_app;
use ec_core::repositories::ORDERS_COLLECTION;
use ec_core::RecordId;
use serde_json::{json, Value};

#[actix_rt::test]
async fn test_checkout_then_reject_malformed_line() {
    let config = common::test_config();
    let (store, state) = common::test_state(&config);
    let mug = common::seed_product(&state, "Mug", 9.99).await;
    let app = test::init_service(create_app(state, &config)).await;

    let token = register_and_login!(&app, "a@x.io");

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .set_json(json!({"items": [{"product_id": mug.id.to_hex(), "quantity": 2, "price": 9.99}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let order: Value = test::read_body_json(resp).await;
    assert_eq!(order["status"], "pending");
    assert!((order["total"].as_f64().unwrap() - 19.98).abs() < 1e-9);
    assert_eq!(order["items"][0]["product_id"], mug.id.to_hex());
    assert_eq!(order["items"][0]["quantity"], 2);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .set_json(json!({"items": [{"product_id": "not-a-valid-id", "quantity": 1, "price": 1.0}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid product ID: not-a-valid-id");
    assert_eq!(store.count(ORDERS_COLLECTION).await, 1);

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .to_request();
    let orders: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
    assert_eq!(orders[0]["id"], order["id"]);
}

#[actix_rt::test]
async fn test_unknown_product_aborts_whole_order() {
    let config = common::test_config();
    let (store, state) = common::test_state(&config);
    let mug = common::seed_product(&state, "Mug", 9.99).await;
    let app = test::init_service(create_app(state, &config)).await;
    let token = register_and_login!(&app, "a@x.io");

    let missing = RecordId::new().to_hex();
    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .set_json(json!({"items": [
            {"product_id": mug.id.to_hex(), "quantity": 1, "price": 9.99},
            {"product_id": missing, "quantity": 1, "price": 5.0},
        ]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], format!("Product not found: {}", missing));
    assert_eq!(body["details"]["product_id"], missing);
    assert_eq!(store.count(ORDERS_COLLECTION).await, 0);
}

#[actix_rt::test]
async fn test_submitted_price_is_kept() {
    let config = common::test_config();
    let (_, state) = common::test_state(&config);
    let mug = common::seed_product(&state, "Mug", 9.99).await;
    let app = test::init_service(create_app(state, &config)).await;
    let token = register_and_login!(&app, "a@x.io");

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .set_json(json!({"items": [{"product_id": mug.id.to_hex(), "quantity": 3, "price": 1.0}]}))
        .to_request();
    let order: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(order["items"][0]["price"], 1.0);
    assert_eq!(order["total"], 3.0);
}

#[actix_rt::test]
async fn test_empty_cart_creates_zero_total_order() {
    let config = common::test_config();
    let (_, state) = common::test_state(&config);
    let app = test::init_service(create_app(state, &config)).await;
    let token = register_and_login!(&app, "a@x.io");

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .set_json(json!({"items": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body = test::read_body(resp).await;
    let raw = std::str::from_utf8(&body).unwrap();
    assert!(raw.contains(r#""total":0.0"#), "unexpected body {}", raw);

    let order: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(order["items"], json!([]));
    assert_eq!(order["status"], "pending");
}

#[actix_rt::test]
async fn test_orders_require_a_valid_token() {
    let config = common::test_config();
    let (_, state) = common::test_state(&config);
    let app = test::init_service(create_app(state, &config)).await;

    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(common::bearer("not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_rt::test]
async fn test_other_users_order_is_not_found() {
    let config = common::test_config();
    let (_, state) = common::test_state(&config);
    let mug = common::seed_product(&state, "Mug", 9.99).await;
    let app = test::init_service(create_app(state, &config)).await;

    let alice = register_and_login!(&app, "alice@x.io");
    let bob = register_and_login!(&app, "bob@x.io");

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&alice))
        .set_json(json!({"items": [{"product_id": mug.id.to_hex(), "quantity": 1, "price": 9.99}]}))
        .to_request();
    let order: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/orders/{}", order["id"].as_str().unwrap());

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(common::bearer(&alice))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(common::bearer(&bob))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order not found");

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(common::bearer(&bob))
        .to_request();
    let orders: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(orders, json!([]));
}

#[actix_rt::test]
async fn test_malformed_order_id_is_bad_request() {
    let config = common::test_config();
    let (_, state) = common::test_state(&config);
    let app = test::init_service(create_app(state, &config)).await;
    let token = register_and_login!(&app, "a@x.io");

    let req = test::TestRequest::get()
        .uri("/api/orders/xyz")
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid order ID");
}

#[actix_rt::test]
async fn test_update_status() {
    let config = common::test_config();
    let (_, state) = common::test_state(&config);
    let app = test::init_service(create_app(state, &config)).await;
    let token = register_and_login!(&app, "a@x.io");

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(common::bearer(&token))
        .set_json(json!({"items": []}))
        .to_request();
    let order: Value = test::call_and_read_body_json(&app, req).await;
    let id = order["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}/status", id))
        .insert_header(common::bearer(&token))
        .set_json(json!({"status": "shipped"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order status updated successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/orders/{}", id))
        .insert_header(common::bearer(&token))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["status"], "shipped");

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}/status", id))
        .insert_header(common::bearer(&token))
        .set_json(json!({"status": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Status is required");

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}/status", id))
        .insert_header(common::bearer(&token))
        .set_json(json!({"status": "  "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::put()
        .uri("/api/orders/xyz/status")
        .insert_header(common::bearer(&token))
        .set_json(json!({"status": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid order ID");

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}/status", RecordId::new()))
        .insert_header(common::bearer(&token))
        .set_json(json!({"status": "shipped"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
