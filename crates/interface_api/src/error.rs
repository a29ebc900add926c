//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_claims::error::ClaimError;
use domain_users::error::UserError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg.clone())
            }
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimError> for ApiError {
    fn from(error: ClaimError) -> Self {
        match &error {
            ClaimError::ClaimNotFound(_) => ApiError::NotFound(error.to_string()),
            ClaimError::UnknownStatus(_) => ApiError::BadRequest("Invalid status".to_string()),
            ClaimError::ValidationFailed(_) | ClaimError::InvalidWorkEntry { .. } => {
                ApiError::Validation(error.to_string())
            }
            ClaimError::MissingDocuments => ApiError::BadRequest(error.to_string()),
            ClaimError::AlreadyResolved(_) | ClaimError::InvalidStatusTransition { .. } => {
                ApiError::Conflict(error.to_string())
            }
            ClaimError::Store(e) => ApiError::Database(e.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        match &error {
            UserError::UserNotFound(_) => ApiError::NotFound(error.to_string()),
            UserError::DuplicateUser(_) => ApiError::Conflict(error.to_string()),
            UserError::InvalidData(_) => ApiError::Validation(error.to_string()),
            UserError::Store(e) => ApiError::Database(e.to_string()),
        }
    }
}
