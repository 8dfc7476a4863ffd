//! ObjectId path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

/// Extractor for MongoDB ObjectId path parameters.
///
/// Parses the single path parameter as a 24-character hex ObjectId and
/// rejects anything else with `400 INVALID_OBJECT_ID` before the handler runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::put;
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn update_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Product ID: {}", id.to_hex())
/// }
///
/// let app = Router::new().route("/products/{id}", put(update_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        ObjectId::parse_str(&id)
            .map(ObjectIdPath)
            .map_err(|_| AppError::InvalidObjectId(id).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn echo(ObjectIdPath(id): ObjectIdPath) -> String {
        id.to_hex()
    }

    fn app() -> Router {
        Router::new().route("/products/{id}", get(echo))
    }

    #[tokio::test]
    async fn test_valid_object_id_is_extracted() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/products/507f1f77bcf86cd799439011")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_short_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/products/abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_hex_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/products/zzzzzzzzzzzzzzzzzzzzzzzz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
