use axum::http::{HeaderName, HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to make cross-origin requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `Access-Control-Allow-Origin: *`
    Any,
    /// Echo the request origin when it is in the list.
    List(Vec<HeaderValue>),
}

/// CORS configuration.
///
/// Environment variables:
/// - `CORS_ALLOWED_ORIGIN` (optional, default: `*`) - `*` or a comma-separated
///   list of origins, e.g. `http://localhost:8080,https://shop.example.com`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

impl CorsConfig {
    /// Parse a `CORS_ALLOWED_ORIGIN` style value.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value == "*" {
            return Ok(Self::default());
        }

        let origins = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "no origins given".to_string(),
            });
        }

        Ok(Self {
            allowed_origins: AllowedOrigins::List(origins),
        })
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CORS_ALLOWED_ORIGIN") {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Creates the CORS layer applied to every response, errors included.
///
/// - Methods: GET, HEAD, OPTIONS, POST, PUT
/// - Headers: Origin, Accept, X-Requested-With, Content-Type,
///   Access-Control-Request-Method, Access-Control-Request-Headers
/// - 1 hour max age
///
/// Credentials are not allowed: browsers reject them with a `*` origin.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = match &config.allowed_origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(origins) => AllowOrigin::list(origins.clone()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
            header::ACCESS_CONTROL_REQUEST_HEADERS,
        ])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(CorsConfig::parse("*").unwrap(), CorsConfig::default());
    }

    #[test]
    fn test_parse_list() {
        let config = CorsConfig::parse("http://localhost:8080, https://shop.example.com").unwrap();
        match config.allowed_origins {
            AllowedOrigins::List(origins) => assert_eq!(origins.len(), 2),
            AllowedOrigins::Any => panic!("expected an origin list"),
        }
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(CorsConfig::parse(" , ").is_err());
    }

    #[test]
    fn test_from_env_defaults_to_any() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", None::<&str>, || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config.allowed_origins, AllowedOrigins::Any);
        });
    }

    #[tokio::test]
    async fn test_wildcard_header_on_simple_request() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(&CorsConfig::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://anywhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn test_preflight_lists_put() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(&CorsConfig::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/")
                    .header("origin", "http://anywhere.example")
                    .header("access-control-request-method", "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let methods = response.headers()["access-control-allow-methods"]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("PUT"));
        assert!(methods.contains("POST"));
    }
}
