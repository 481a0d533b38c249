//! API error type and HTTP response mapping
//!
//! Validation failures carry per-field messages in `details`; storage and
//! other unexpected failures are logged server-side and answered with a
//! generic 500 body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::error;

/// API errors surfaced to HTTP clients
#[derive(Debug)]
pub enum ApiError {
    /// Schema validation failure with per-field messages
    Validation(BTreeMap<String, String>),
    /// Malformed request outside schema validation (bad ranks, oversized batch, ...)
    BadRequest(String),
    /// Target entity does not exist
    NotFound(String),
    /// Unexpected failure; full error is logged, client sees a generic message
    Internal(String),
}

/// Error response body shared by all failure modes
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ApiError::NotFound(what.into())
    }
}

impl From<platelist_common::Error> for ApiError {
    fn from(err: platelist_common::Error) -> Self {
        use platelist_common::Error;
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation_failed".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(json!(fields)),
                },
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "invalid_request".to_string(),
                    message,
                    details: None,
                },
            ),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not_found".to_string(),
                    message: format!("{} not found", what),
                    details: None,
                },
            ),
            ApiError::Internal(message) => {
                // Log the real cause, never leak it to the client
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal_error".to_string(),
                        message: "Internal server error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
