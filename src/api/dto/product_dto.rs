//! Product DTOs for create, update, get, list, and search operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewProduct, Product, ProductPatch};
use crate::service::ProductListing;

/// Request body for `POST /products`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

/// Request body for `PATCH /products/{id}`. Omitted fields are left
/// unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement price.
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

/// A product as returned by every endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDto {
    /// Store-assigned identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Response body for `GET /products`.
///
/// The shape depends on the branch taken by the service: the pagination
/// bypass returns only `data`, while the paginated branch adds `total`
/// and `nextLink` (null when there is no next page or no base URL).
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProductListResponse {
    /// Paginated window with total count and next-page link.
    Page {
        /// Products in the requested window.
        data: Vec<ProductDto>,
        /// Total number of stored products.
        total: i64,
        /// Link to the next page, if any.
        #[serde(rename = "nextLink")]
        next_link: Option<String>,
    },
    /// Pagination bypass: the full collection.
    All {
        /// Every stored product.
        data: Vec<ProductDto>,
    },
}

impl From<ProductListing> for ProductListResponse {
    fn from(listing: ProductListing) -> Self {
        match listing {
            ProductListing::All { data } => Self::All {
                data: data.into_iter().map(ProductDto::from).collect(),
            },
            ProductListing::Page {
                data,
                total,
                next_link,
            } => Self::Page {
                data: data.into_iter().map(ProductDto::from).collect(),
                total,
                next_link,
            },
        }
    }
}
