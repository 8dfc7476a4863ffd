//! Orders API routes

use axum::Router;
use domain_orders::{MongoOrderRepository, OrderService, handlers};

use crate::state::AppState;

/// `POST /orders`
pub fn router(state: &AppState) -> Router {
    let repository = MongoOrderRepository::new(&state.db);
    handlers::router(OrderService::new(repository))
}
