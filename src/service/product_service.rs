//! Product service: translates resource commands into store calls.

use std::sync::Arc;

use crate::domain::{NewProduct, PageRequest, Product, ProductId, ProductPatch};
use crate::error::ServiceError;
use crate::persistence::{ProductStore, StoreError};

/// Result shape of [`ProductService::find_all`].
///
/// The unpaginated branch carries only the data; the paginated branch
/// additionally carries the total record count and, when a next page
/// exists and a base URL was supplied, a link to it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListing {
    /// Pagination bypass: the entire collection in one result.
    All {
        /// Every stored product.
        data: Vec<Product>,
    },
    /// One offset window of the collection.
    Page {
        /// The requested window, at most `limit` products.
        data: Vec<Product>,
        /// Total number of stored products.
        total: i64,
        /// Link to the next page, when one exists and a base URL was given.
        next_link: Option<String>,
    },
}

/// Stateless façade over the product store.
///
/// Each operation issues at most two store calls and rewraps every store
/// failure into one of two outward error kinds with a fixed
/// per-operation message: [`ServiceError::NotFound`] when an identifier
/// does not resolve, [`ServiceError::BadRequest`] for everything else.
/// The service holds no state between requests; concurrent requests
/// against the same identifier have no ordering guarantee beyond what
/// the store provides.
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    /// Creates a new `ProductService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Inserts one new product with the given fields.
    ///
    /// # Errors
    ///
    /// Any store failure becomes `BadRequest("Failed to create product")`;
    /// no distinction is made between failure causes.
    pub async fn create(&self, fields: NewProduct) -> Result<Product, ServiceError> {
        let product = self
            .store
            .create(&fields)
            .await
            .map_err(|e| rewrap(e, "Failed to create product"))?;

        tracing::info!(id = %product.id, "product created");
        Ok(product)
    }

    /// Returns products, paginated unless either `page` or `limit` is zero.
    ///
    /// With `page ≥ 1` and `limit ≥ 1`, fetches the window at offset
    /// `(page - 1) * limit` plus the total count, and builds
    /// `"{base_url}?page={page + 1}&limit={limit}"` when more records
    /// remain and `base_url` was supplied. A zero `page` or `limit`
    /// bypasses pagination entirely and returns the full collection —
    /// callers cannot use the value 0 to request a paginated window.
    ///
    /// # Errors
    ///
    /// Any store failure becomes `BadRequest("Failed to fetch products")`.
    pub async fn find_all(
        &self,
        page: u32,
        limit: u32,
        base_url: Option<&str>,
    ) -> Result<ProductListing, ServiceError> {
        if page == 0 || limit == 0 {
            let data = self
                .store
                .find_many(None)
                .await
                .map_err(|e| rewrap(e, "Failed to fetch products"))?;
            return Ok(ProductListing::All { data });
        }

        let skip = i64::from(page - 1) * i64::from(limit);
        let data = self
            .store
            .find_many(Some(PageRequest {
                skip,
                take: i64::from(limit),
            }))
            .await
            .map_err(|e| rewrap(e, "Failed to fetch products"))?;
        let total = self
            .store
            .count()
            .await
            .map_err(|e| rewrap(e, "Failed to fetch products"))?;

        let next_page = (i64::from(page) * i64::from(limit) < total).then(|| page + 1);
        let next_link = match (next_page, base_url) {
            (Some(next), Some(base)) => Some(format!("{base}?page={next}&limit={limit}")),
            _ => None,
        };

        Ok(ProductListing::Page {
            data,
            total,
            next_link,
        })
    }

    /// Fetches a single product by identifier.
    ///
    /// A missing record is reported as `BadRequest("Failed to fetch
    /// product")`, not as not-found: the original service swallowed its
    /// own not-found signal inside a blanket failure handler, and
    /// callers depend on the resulting status. Kept as documented
    /// behavior rather than silently corrected.
    ///
    /// # Errors
    ///
    /// `BadRequest("Failed to fetch product")` on store failure or when
    /// the identifier does not resolve.
    pub async fn find_one(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.store
            .find_unique(id)
            .await
            .map_err(|e| rewrap(e, "Failed to fetch product"))?
            .ok_or_else(|| ServiceError::BadRequest("Failed to fetch product".to_string()))
    }

    /// Applies a partial update; unspecified fields are left unchanged.
    ///
    /// Verifies existence first so that a missing identifier surfaces as
    /// not-found instead of a generic failure.
    ///
    /// # Errors
    ///
    /// `NotFound("Product with ID {id} not found")` when the identifier
    /// does not resolve; `BadRequest("Failed to update product")` on any
    /// other store failure.
    pub async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ServiceError> {
        let existing = self
            .store
            .find_unique(id)
            .await
            .map_err(|e| rewrap(e, "Failed to update product"))?;
        if existing.is_none() {
            return Err(ServiceError::product_not_found(id));
        }

        let product = self
            .store
            .update(id, &patch)
            .await
            .map_err(|e| rewrap(e, "Failed to update product"))?;

        tracing::info!(id = %product.id, "product updated");
        Ok(product)
    }

    /// Deletes a product, returning the deleted record's data.
    ///
    /// Same existence-check-first split as [`ProductService::update`].
    ///
    /// # Errors
    ///
    /// `NotFound("Product with ID {id} not found")` when the identifier
    /// does not resolve; `BadRequest("Failed to delete product")` on any
    /// other store failure.
    pub async fn remove(&self, id: &ProductId) -> Result<Product, ServiceError> {
        let existing = self
            .store
            .find_unique(id)
            .await
            .map_err(|e| rewrap(e, "Failed to delete product"))?;
        if existing.is_none() {
            return Err(ServiceError::product_not_found(id));
        }

        let product = self
            .store
            .delete(id)
            .await
            .map_err(|e| rewrap(e, "Failed to delete product"))?;

        tracing::info!(id = %product.id, "product deleted");
        Ok(product)
    }

    /// Returns products whose name contains `keyword`, case-insensitively.
    ///
    /// Result order is whatever the store returns; it is not specified
    /// here.
    ///
    /// # Errors
    ///
    /// Any store failure becomes `BadRequest("Failed to search products")`.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>, ServiceError> {
        self.store
            .search_by_name(keyword)
            .await
            .map_err(|e| rewrap(e, "Failed to search products"))
    }
}

/// Collapses a store failure into the operation's fixed outward message.
fn rewrap(err: StoreError, message: &str) -> ServiceError {
    tracing::warn!(error = %err, "store operation failed");
    ServiceError::BadRequest(message.to_string())
}
