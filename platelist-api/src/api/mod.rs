//! HTTP request handlers

use axum::Json;
use serde::Serialize;

pub mod contact;
pub mod lists;
pub mod pages;
pub mod reviews;
pub mod social;
pub mod taxonomies;
pub mod transfer;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "platelist-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
