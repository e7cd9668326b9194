//! Product handlers: create, list, search, get, update, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    CreateProductRequest, ListParams, ProductDto, ProductListResponse, SearchParams,
    UpdateProductRequest,
};
use crate::app_state::AppState;
use crate::domain::ProductId;
use crate::error::{ErrorResponse, ServiceError};

/// Base URL used when building next-page links.
const PRODUCTS_BASE: &str = "/api/v1/products";

/// `POST /products` — Create a new product.
///
/// # Errors
///
/// Returns [`ServiceError::BadRequest`] if the store rejects the insert.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    summary = "Create a product",
    description = "Inserts one new product and returns it with its store-assigned identifier.",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductDto),
        (status = 400, description = "Failed to create product", body = ErrorResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.product_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ProductDto::from(product))))
}

/// `GET /products` — List products with pagination.
///
/// # Errors
///
/// Returns [`ServiceError::BadRequest`] if the store fails.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    summary = "List products",
    description = "Returns one page of products with a total count and next-page link. Passing page=0 or limit=0 bypasses pagination and returns the full collection.",
    params(ListParams),
    responses(
        (status = 200, description = "Product list", body = ProductListResponse),
        (status = 400, description = "Failed to fetch products", body = ErrorResponse),
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let listing = state
        .product_service
        .find_all(params.page, params.limit, Some(PRODUCTS_BASE))
        .await?;
    Ok(Json(ProductListResponse::from(listing)))
}

/// `GET /products/search` — Search products by name keyword.
///
/// # Errors
///
/// Returns [`ServiceError::BadRequest`] if the store fails.
#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    tag = "Products",
    summary = "Search products",
    description = "Returns products whose name contains the keyword, matched case-insensitively.",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductDto>),
        (status = 400, description = "Failed to search products", body = ErrorResponse),
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let matches = state.product_service.search(&params.keyword).await?;
    let data: Vec<ProductDto> = matches.into_iter().map(ProductDto::from).collect();
    Ok(Json(data))
}

/// `GET /products/{id}` — Get a single product.
///
/// # Errors
///
/// Returns [`ServiceError::BadRequest`] on store failure or when the
/// identifier does not resolve (see [`crate::service::ProductService::find_one`]).
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Get a product",
    description = "Returns the product with the given identifier. A missing identifier is reported as 400, matching the service's documented behavior.",
    params(
        ("id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Product details", body = ProductDto),
        (status = 400, description = "Failed to fetch product", body = ErrorResponse),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.product_service.find_one(&ProductId::from(id)).await?;
    Ok(Json(ProductDto::from(product)))
}

/// `PATCH /products/{id}` — Partially update a product.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] when the identifier does not
/// resolve, [`ServiceError::BadRequest`] on any other store failure.
#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Update a product",
    description = "Applies a partial update; omitted fields are left unchanged.",
    params(
        ("id" = String, Path, description = "Product identifier"),
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 400, description = "Failed to update product", body = ErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state
        .product_service
        .update(&ProductId::from(id), req.into())
        .await?;
    Ok(Json(ProductDto::from(product)))
}

/// `DELETE /products/{id}` — Delete a product.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] when the identifier does not
/// resolve, [`ServiceError::BadRequest`] on any other store failure.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Delete a product",
    description = "Deletes the product and returns the deleted record's data.",
    params(
        ("id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Deleted product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 400, description = "Failed to delete product", body = ErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.product_service.remove(&ProductId::from(id)).await?;
    Ok(Json(ProductDto::from(product)))
}

/// Product resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", axum::routing::post(create_product).get(list_products))
        .route("/products/search", get(search_products))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::api::build_router;
    use crate::persistence::ProductStore;
    use crate::persistence::memory::MemoryProductStore;
    use crate::service::ProductService;

    fn make_app() -> Router {
        let store = Arc::new(MemoryProductStore::new());
        let service = ProductService::new(store as Arc<dyn ProductStore>);
        build_router().with_state(AppState {
            product_service: Arc::new(service),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .ok()
            .unwrap_or_else(|| panic!("body read failed"));
        serde_json::from_slice(&bytes)
            .ok()
            .unwrap_or_else(|| panic!("body is not JSON"))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .ok()
            .unwrap_or_else(|| panic!("request build failed"))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .ok()
            .unwrap_or_else(|| panic!("request build failed"))
    }

    #[tokio::test]
    async fn create_returns_201_with_id() {
        let app = make_app();
        let req = json_request(
            "POST",
            "/api/v1/products",
            serde_json::json!({"name": "Red Shirt", "price": 19.99}),
        );

        let response = app
            .oneshot(req)
            .await
            .ok()
            .unwrap_or_else(|| panic!("request failed"));
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["name"], "Red Shirt");
        assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn get_missing_product_is_400() {
        let app = make_app();
        let response = app
            .oneshot(get_request("/api/v1/products/does-not-exist"))
            .await
            .ok()
            .unwrap_or_else(|| panic!("request failed"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Failed to fetch product");
    }

    #[tokio::test]
    async fn update_missing_product_is_404() {
        let app = make_app();
        let req = json_request(
            "PATCH",
            "/api/v1/products/does-not-exist",
            serde_json::json!({"price": 1.0}),
        );

        let response = app
            .oneshot(req)
            .await
            .ok()
            .unwrap_or_else(|| panic!("request failed"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Product with ID does-not-exist not found"
        );
    }

    #[tokio::test]
    async fn list_defaults_to_first_page_of_three() {
        let app = make_app();
        for i in 1..=4 {
            let req = json_request(
                "POST",
                "/api/v1/products",
                serde_json::json!({"name": format!("Product {i}"), "price": 9.99}),
            );
            let response = app
                .clone()
                .oneshot(req)
                .await
                .ok()
                .unwrap_or_else(|| panic!("request failed"));
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(get_request("/api/v1/products"))
            .await
            .ok()
            .unwrap_or_else(|| panic!("request failed"));
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["total"], 4);
        assert_eq!(json["nextLink"], "/api/v1/products?page=2&limit=3");
    }

    #[tokio::test]
    async fn list_rejects_non_numeric_page() {
        let app = make_app();
        let response = app
            .oneshot(get_request("/api/v1/products?page=abc"))
            .await
            .ok()
            .unwrap_or_else(|| panic!("request failed"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_endpoint_filters_by_keyword() {
        let app = make_app();
        for name in ["Red Shirt", "SHIRTS", "Blue Pants"] {
            let req = json_request(
                "POST",
                "/api/v1/products",
                serde_json::json!({"name": name, "price": 9.99}),
            );
            let response = app
                .clone()
                .oneshot(req)
                .await
                .ok()
                .unwrap_or_else(|| panic!("request failed"));
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(get_request("/api/v1/products/search?keyword=shirt"))
            .await
            .ok()
            .unwrap_or_else(|| panic!("request failed"));
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let names: Vec<&str> = json
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|p| p["name"].as_str())
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(names, ["Red Shirt", "SHIRTS"]);
    }
}
