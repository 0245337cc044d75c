#![allow(dead_code)]

//! Test infrastructure for ident-server API tests

use ident_auth::{CredentialHasher, TokenService};
use ident_db::SqliteUserRepository;
use ident_server::{AppState, build_router};
use ident_service::IdentityService;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Router over a fresh in-memory database
pub async fn create_test_app() -> Router {
    let pool = ident_db::create_in_memory_pool()
        .await
        .expect("Failed to create test database");

    let tokens = Arc::new(TokenService::with_hs256(
        TEST_SECRET,
        Duration::from_secs(3600),
    ));
    let service = IdentityService::new(
        Arc::new(SqliteUserRepository::new(pool)),
        tokens,
        CredentialHasher::with_cost(4),
    );

    build_router(AppState::new(service))
}

/// Send a request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register a user and return the created projection
pub async fn register(app: &Router, user_name: &str, password: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/users",
        None,
        Some(json!({
            "user_name": user_name,
            "email": format!("{user_name}@test.local"),
            "password": password,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    json["user"].clone()
}

/// Log in and return a ready-to-send `Authorization` header value
pub async fn bearer(app: &Router, user_name: &str, password: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "user_name": user_name, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    format!("Bearer {}", json["token"].as_str().unwrap())
}
