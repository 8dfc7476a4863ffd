//! HTTP handlers for Products API

use axum::{
    extract::{Query, State},
    routing::{get, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    ErrorResponse, JsonBody, ObjectIdPath,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::{OpenApi, ToResponse};

use crate::error::ProductResult;
use crate::models::{Product, SearchParams, UpdateProductResponse};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, update_product, search_products),
    components(
        schemas(Product, UpdateProductResponse),
        responses(
            NotFoundResponse,
            UpdateProductBadRequestResponse,
            BadRequestResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// The three ways `PUT /products/{id}` answers 400, in the order they are checked
#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid id, unparseable body or empty update",
    content_type = "application/json",
    examples(
        ("InvalidObjectId" = (summary = "Path id is not a 24-character hex ObjectId", value = json!({
            "code": 1002,
            "error": "INVALID_OBJECT_ID",
            "message": "Invalid identifier: abc123"
        }))),
        ("InvalidJson" = (summary = "Body is missing, not JSON, or not an object", value = json!({
            "code": 1003,
            "error": "INVALID_JSON",
            "message": "Failed to deserialize the JSON body into the target type: invalid type: sequence, expected a map at line 1 column 0"
        }))),
        ("EmptyUpdate" = (summary = "Body is an empty object", value = json!({
            "code": 1006,
            "error": "BAD_REQUEST",
            "message": "Update body must contain at least one field"
        })))
    )
)]
pub struct UpdateProductBadRequestResponse(pub ErrorResponse);

/// Create the products router
///
/// Paths are absolute (`/products`, `/products/{id}`, `/search`), so merge
/// it rather than nesting it.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", put(update_product))
        .route("/search", get(search_products))
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Partially update a product
///
/// Only the supplied fields are changed.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ObjectId (24 hex characters)")
    ),
    request_body(content = Object, description = "Fields to set", content_type = "application/json"),
    responses(
        (status = 200, description = "Update applied", body = UpdateProductResponse),
        (status = 400, response = UpdateProductBadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> ProductResult<Json<UpdateProductResponse>> {
    let updated_count = service.update_product(id, fields).await?;
    Ok(Json(UpdateProductResponse {
        success: true,
        updated_count,
    }))
}

/// Search products by free text
///
/// Matches `subject`, `location`, `price`, `rating` or `availableInventory`
/// case-insensitively. No match is an empty array, not an error.
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<SearchParams>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_products(params.query.as_deref()).await?;
    Ok(Json(products))
}
