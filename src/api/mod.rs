//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All product endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Product CRUD API",
        description = "Product CRUD API description",
        version = "0.1"
    ),
    paths(
        handlers::product::create_product,
        handlers::product::list_products,
        handlers::product::search_products,
        handlers::product::get_product,
        handlers::product::update_product,
        handlers::product::delete_product,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::CreateProductRequest,
        dto::UpdateProductRequest,
        dto::ProductDto,
        dto::ProductListResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Products", description = "Product CRUD and search"),
        (name = "System", description = "Health and service metadata"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}
