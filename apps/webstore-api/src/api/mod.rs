//! API routes module
//!
//! Routes are mounted at the root; [`app`] wraps them with docs, the 404
//! fallback and the cross-cutting layers.

pub mod assets;
pub mod health;
pub mod orders;
pub mod products;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(orders::router(state))
        .merge(health::router(state.clone()))
        .merge(assets::router(&state.config.images_dir()))
        .merge(health_router(state.config.app))
}

/// The complete application router
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state), &state.config.cors)
}
