//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

/// `/products`, `/products/{id}` and `/search`
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    handlers::router(ProductService::new(repository))
}
