pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::error::{Error as MongoError, ErrorKind};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product 65f1c0ffee0000000000beef not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain error enums convert into this type; the `IntoResponse` impl is the
/// single place where error kinds become status codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] MongoError),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid identifier: {0}")]
    InvalidObjectId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code) = match self {
            AppError::Database(e) => map_mongo_error(&e),
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    e.body_text(),
                    None,
                    ErrorCode::InvalidJson,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::Value::Null)),
                    ErrorCode::ValidationError,
                )
            }
            AppError::InvalidObjectId(raw) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidObjectId.code(),
                    "Invalid identifier: {}",
                    raw
                );
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid identifier: {}", raw),
                    None,
                    ErrorCode::InvalidObjectId,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, None, ErrorCode::BadRequest)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                    ErrorCode::InternalError,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Maps a MongoDB driver error to response components.
///
/// Every store failure answers with the `INTERNAL_ERROR` body; the error kind
/// only selects the code recorded in the log line.
fn map_mongo_error(
    error: &MongoError,
) -> (StatusCode, String, Option<serde_json::Value>, ErrorCode) {
    let kind_code = match error.kind.as_ref() {
        ErrorKind::Authentication { .. } => ErrorCode::DatabaseConfig,
        ErrorKind::ServerSelection { .. } => ErrorCode::DatabaseUnavailable,
        ErrorKind::Io(_) | ErrorKind::ConnectionPoolCleared { .. } => ErrorCode::DatabaseIo,
        ErrorKind::BsonDeserialization(_) => ErrorCode::DatabaseDecode,
        ErrorKind::BsonSerialization(_) => ErrorCode::DatabaseEncode,
        ErrorKind::Write(_) => ErrorCode::DatabaseWrite,
        ErrorKind::Command(_) => ErrorCode::DatabaseError,
        _ => ErrorCode::DatabaseUnhandled,
    };

    tracing::error!(
        error_code = kind_code.code(),
        "Database error ({}): {:?}",
        kind_code,
        error
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::InternalError.default_message().to_string(),
        None,
        ErrorCode::InternalError,
    )
}

/// Helper function to create error responses outside of `AppError`.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "Image not found");
/// ```
pub fn error_response(
    status: StatusCode,
    error_code: ErrorCode,
    message: impl Into<String>,
) -> Response {
    (status, Json(ErrorResponse::new(error_code, message))).into_response()
}
