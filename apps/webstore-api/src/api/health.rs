//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Create the `/ready` router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings MongoDB
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Storefront",
    responses(
        (status = 200, description = "MongoDB reachable"),
        (status = 503, description = "MongoDB unreachable")
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let client = state.mongo_client.clone();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async move {
            let status = database::mongodb::check_health_detailed(&client).await;
            tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
            }
        }),
    )];

    run_health_checks(checks)
        .await
        .unwrap_or_else(|not_ready| not_ready)
}
