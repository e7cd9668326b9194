//! The data-store contract consumed by the service layer.

use async_trait::async_trait;

use crate::domain::{NewProduct, PageRequest, Product, ProductId, ProductPatch};

/// Opaque failure from a store backend.
///
/// The service never inspects the cause: every store error is rewrapped
/// into a fixed per-operation message before leaving the service.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend-level failure (connectivity, constraint violation,
    /// missing row on a direct mutation).
    #[error("database error: {0}")]
    Database(String),
}

/// Data-access operations over the `Product` collection.
///
/// Connection lifetime and pooling are owned entirely by the
/// implementation; callers neither acquire nor release connections.
#[async_trait]
pub trait ProductStore: std::fmt::Debug + Send + Sync {
    /// Inserts one new product, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure.
    async fn create(&self, fields: &NewProduct) -> Result<Product, StoreError>;

    /// Returns products, windowed by `range` when given, otherwise all.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure.
    async fn find_many(&self, range: Option<PageRequest>) -> Result<Vec<Product>, StoreError>;

    /// Looks up a single product by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure. A missing record is
    /// `Ok(None)`, not an error.
    async fn find_unique(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Applies a partial update; `None` fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure, including a missing
    /// row (existence is checked by the caller beforehand).
    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError>;

    /// Deletes a product, returning the deleted record's data.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure, including a missing
    /// row (existence is checked by the caller beforehand).
    async fn delete(&self, id: &ProductId) -> Result<Product, StoreError>;

    /// Returns the total number of stored products.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Returns products whose name contains `keyword`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failure.
    async fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>, StoreError>;
}
