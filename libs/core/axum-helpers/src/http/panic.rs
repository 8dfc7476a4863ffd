use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

/// Turns a panic payload into the standard 500 body.
///
/// The payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::InternalError.code(),
        panic = %detail,
        "Request handler panicked"
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(
            ErrorCode::InternalError,
            ErrorCode::InternalError.default_message(),
        )),
    )
        .into_response()
}

/// Catch-all layer for handler panics.
///
/// Apply it inside the CORS layer so panic responses still carry CORS headers.
pub fn panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}
