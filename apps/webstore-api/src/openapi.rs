//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webstore API",
        version = "0.1.0",
        description = "Storefront API: product catalogue, search and checkout over MongoDB"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(crate::api::assets::welcome, crate::api::health::readiness_check),
    tags(
        (name = "Storefront", description = "Welcome page, static assets and readiness")
    )
)]
struct BaseDoc;

/// Combined OpenAPI documentation for all APIs
///
/// Domain routers use absolute paths, so their documents are merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_products::ApiDoc::openapi());
        doc.merge(domain_orders::ApiDoc::openapi());
        doc
    }
}
