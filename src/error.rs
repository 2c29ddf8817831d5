//! Error types for the REST API.

use crate::db::StoreError;
use crate::validation::{MAX_PRICE, MIN_PRICE, ValidationError, ValidationErrors};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// Body returned when a requested entity does not exist.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Body returned when a write is rejected.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResponse {
    /// One message per failed rule.
    pub errors: Vec<String>,
}

/// API error types.
///
/// Validation, integrity and unexpected write failures share one wire shape
/// but stay separate here so they can be logged and tested apart.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Restaurant not found.
    #[error("Restaurant not found")]
    RestaurantNotFound(i64),

    /// Request input failed a domain rule.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Write violated a referential constraint.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Any other failure during a write.
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Database failure while reading.
    #[error("Database error: {0}")]
    Database(String),
}

impl ApiError {
    /// Maps a storage failure on a write path.
    ///
    /// Write failures are always reported as client errors.
    #[must_use]
    pub fn from_write(err: StoreError) -> Self {
        match err {
            StoreError::ForeignKeyViolation(detail) => {
                debug!(%detail, "Rejected write with dangling reference");
                ApiError::Integrity("Invalid pizza_id or restaurant_id".to_string())
            }
            StoreError::CheckViolation(detail) => {
                debug!(%detail, "Rejected write failing a check constraint");
                ApiError::Validation(
                    ValidationError::new(format!(
                        "price must be between {MIN_PRICE} and {MAX_PRICE}"
                    ))
                    .into(),
                )
            }
            StoreError::Database(e) => {
                error!(error = %e, "Write failed");
                ApiError::Unexpected(e.to_string())
            }
        }
    }

    /// Maps a storage failure on a read path.
    #[must_use]
    pub fn from_read(err: StoreError) -> Self {
        error!(error = %err, "Read failed");
        ApiError::Database(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unexpected(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RestaurantNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Restaurant not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsResponse {
                    errors: errors.messages(),
                }),
            )
                .into_response(),
            ApiError::Integrity(message) | ApiError::Unexpected(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsResponse {
                    errors: vec![message],
                }),
            )
                .into_response(),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
