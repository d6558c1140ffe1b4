//! API error type and its HTTP mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medleave_core::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can surface. Every variant maps to a JSON
/// `{"error": ...}` body with the status code the contract names.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    #[error("service_code and identity_number are required")]
    MissingSearchKeys,

    #[error("service code already exists")]
    Conflict,

    #[error("medical leave record not found")]
    NotFound,

    #[error("server error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(_) => ApiError::Conflict,
            StoreError::Sqlite(e) => ApiError::Internal(e.to_string()),
        }
    }
}

// Malformed JSON or a mistyped field never reaches a handler body;
// the rejection text goes back verbatim as a server error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Internal(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField(_) | ApiError::MissingSearchKeys | ApiError::Conflict => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
