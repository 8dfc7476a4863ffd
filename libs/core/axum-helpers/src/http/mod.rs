//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration
//! - Security headers
//! - Converting handler panics into JSON 500 responses
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{CorsConfig, create_cors_layer, panic_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(panic_layer())
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&CorsConfig::default()));
//! ```

pub mod cors;
pub mod panic;
pub mod security;

// Re-export commonly used functions
pub use cors::{AllowedOrigins, CorsConfig, create_cors_layer};
pub use panic::{handle_panic, panic_layer};
pub use security::security_headers;
