//! Shared test helpers: in-memory database, router setup, request plumbing

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use platelist_api::{build_router, AppState};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// In-memory pool with the full schema applied
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();
    platelist_common::db::create_schema(&pool).await.unwrap();
    pool
}

/// Router over a fresh in-memory database
pub async fn test_app() -> Router {
    build_router(AppState::new(test_pool().await))
}

/// Send a request, returning status and parsed JSON body (Null when empty)
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}

/// Create a review through the API, returning its id
pub async fn seed_review(app: &Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/reviews",
        json!({
            "name": name,
            "cuisine": "Italian",
            "location": "SoHo",
            "rating": 4.0,
            "excerpt": "A fine spot",
            "priceRange": "$$"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed review failed: {}", body);
    body["id"].as_i64().unwrap()
}

/// Create a top-ten list through the API, returning its id
pub async fn seed_list(app: &Router, name: &str) -> i64 {
    let (status, body) = post(app, "/api/top-ten-lists", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "seed list failed: {}", body);
    body["id"].as_i64().unwrap()
}
