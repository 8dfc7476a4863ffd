//! Welcome page and static images

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::Response,
    routing::get,
};
use axum_helpers::{ErrorCode, error_response};
use std::path::Path;
use tower_http::services::ServeDir;

pub const WELCOME_MESSAGE: &str = "Select a collection, e.g., /products";

/// `GET /` and `GET /images/*`
pub fn router(images_dir: &Path) -> Router {
    let images = ServeDir::new(images_dir).not_found_service(image_not_found.into_service());

    Router::new()
        .route("/", get(welcome))
        .nest_service("/images", images)
}

/// Welcome text pointing at the catalogue
#[utoipa::path(
    get,
    path = "/",
    tag = "Storefront",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    )
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn image_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "Image not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn fixture_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("webstore-assets-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_welcome() {
        let response = router(&fixture_dir("welcome"))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], WELCOME_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_existing_image_is_served() {
        let dir = fixture_dir("existing");
        std::fs::write(dir.join("lesson.png"), b"not really a png").unwrap();

        let response = router(&dir)
            .oneshot(
                Request::builder()
                    .uri("/images/lesson.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "image/png");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"not really a png");
    }

    #[tokio::test]
    async fn test_missing_image_is_json_404() {
        let response = router(&fixture_dir("missing"))
            .oneshot(
                Request::builder()
                    .uri("/images/nope.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Image not found");
    }
}
