use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Store assigned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(e) => AppError::ValidationError(e),
            OrderError::Database(e) => AppError::Database(e),
            OrderError::UnexpectedId(id) => {
                AppError::InternalServerError(format!("Inserted order has id {}", id))
            }
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
