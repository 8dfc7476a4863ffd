//! JSON extractor with automatic validation using the validator crate.

use super::JsonBody;
use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes like [`JsonBody`], then runs the `validator` crate's
/// `Validate` impl. Field errors are returned as `400 VALIDATION_ERROR`
/// with the per-field report in `details`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateOrder {
///     #[validate(length(min = 1))]
///     phone: String,
/// }
///
/// async fn create_order(ValidatedJson(payload): ValidatedJson<CreateOrder>) -> String {
///     payload.phone
/// }
///
/// let app = Router::new().route("/orders", post(create_order));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(data) = JsonBody::<T>::from_request(req, state).await?;

        data.validate()
            .map_err(|e| AppError::ValidationError(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Contact {
        #[validate(length(min = 1))]
        phone: String,
    }

    async fn handler(ValidatedJson(contact): ValidatedJson<Contact>) -> String {
        contact.phone
    }

    async fn send(body: &'static str) -> Response {
        Router::new()
            .route("/", post(handler))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let response = send(r#"{"phone":"555-0100"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_field_is_validation_error() {
        let response = send(r#"{"phone":""}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["phone"].is_array());
    }

    #[tokio::test]
    async fn test_missing_field_is_invalid_json() {
        let response = send(r#"{}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "INVALID_JSON");
    }
}
