use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback so unknown paths get the standard JSON body.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        "The requested resource was not found",
    )
}
