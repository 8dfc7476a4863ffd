//! JSON extractor that reports body errors in the standard error shape.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for `axum::Json` on the request side.
///
/// Missing content type, unparseable JSON and shape mismatches all become
/// `400 INVALID_JSON` rather than axum's 415/422 plain-text rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(data)| JsonBody(data))
            .map_err(|rejection| AppError::from(rejection).into_response())
    }
}
