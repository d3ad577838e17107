//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::http::header::{HeaderName, AUTHORIZATION};
use actix_web::{test, web};
use ec_api::AppState;
use ec_core::repositories::USERS_COLLECTION;
use ec_core::{BcryptPasswordHasher, MemoryDocumentStore, Product, ProductDraft};
use ec_shared::config::AppConfig;
use serde_json::json;

pub type TestState = AppState<MemoryDocumentStore, BcryptPasswordHasher>;

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt.secret = "http-test-secret".to_string();
    config.auth.password_hash_cost = 4;
    config
}

pub fn test_state(config: &AppConfig) -> (Arc<MemoryDocumentStore>, web::Data<TestState>) {
    let store = Arc::new(MemoryDocumentStore::new().with_unique_index(USERS_COLLECTION, "email"));
    let state = AppState::new(
        store.clone(),
        BcryptPasswordHasher::new(config.auth.password_hash_cost),
        &config.auth,
    );
    (store, web::Data::new(state))
}

pub fn register_request(email: &str, password: &str, name: &str) -> test::TestRequest {
    test::TestRequest::post().uri("/api/auth/register").set_json(json!({
        "email": email,
        "password": password,
        "name": name,
        "address": "1 Test Street",
    }))
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn bearer(token: &str) -> (HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn seed_product(state: &TestState, name: &str, price: f64) -> Product {
    state
        .catalog_service
        .create_product(ProductDraft {
            name: name.to_string(),
            description: String::new(),
            price,
            stock: 10,
            category: "kitchen".to_string(),
        })
        .await
        .expect("seed product")
}

/// Register an account and return a bearer token for it
macro_rules! register_and_login {
    ($app:expr, $email:expr) => {{
        let req = common::register_request($email, "secret1", "Test User").to_request();
        let resp = actix_web::test::call_service($app, req).await;
        assert_eq!(resp.status(), 201, "registration of {} failed", $email);

        let req = common::login_request($email, "secret1").to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json($app, req).await;
        body["token"].as_str().expect("login returns a token").to_string()
    }};
}
