//! HTTP handlers for Orders API

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_helpers::{errors::responses::InternalServerErrorResponse, ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::{OpenApi, ToResponse};

use crate::error::OrderResult;
use crate::models::{CreateOrder, CreateOrderResponse};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for Orders API
#[derive(OpenApi)]
#[openapi(
    paths(create_order),
    components(
        schemas(CreateOrder, CreateOrderResponse),
        responses(CreateOrderBadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Orders", description = "Checkout endpoint")
    )
)]
pub struct ApiDoc;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - unparseable body or failed field validation",
    content_type = "application/json",
    examples(
        ("InvalidJson" = (summary = "Body is not JSON, misses a field, or cart is not an array of strings", value = json!({
            "code": 1003,
            "error": "INVALID_JSON",
            "message": "Failed to deserialize the JSON body into the target type: missing field `cart` at line 1 column 58"
        }))),
        ("ValidationError" = (summary = "A name is empty or a cart entry is not a product id", value = json!({
            "code": 1001,
            "error": "VALIDATION_ERROR",
            "message": "Request validation failed",
            "details": {
                "cart": [{
                    "code": "product_id",
                    "message": "cart entries must be 24-character hex product ids",
                    "params": {"value": ["abc123"]}
                }]
            }
        })))
    )
)]
pub struct CreateOrderBadRequestResponse(pub ErrorResponse);

/// Create the orders router, serving `POST /orders`
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    Router::new()
        .route("/orders", post(create_order))
        .with_state(Arc::new(service))
}

/// Place an order
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order stored", body = CreateOrderResponse),
        (status = 400, response = CreateOrderBadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<(StatusCode, Json<CreateOrderResponse>)> {
    let order = service.create_order(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            success: true,
            order_id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
        }),
    ))
}
