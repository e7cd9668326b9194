//! PostgreSQL implementation of the product store.
//!
//! Expects the following schema (schema management is out of scope for
//! this service):
//!
//! ```sql
//! CREATE TABLE products (
//!     id          TEXT PRIMARY KEY,
//!     name        TEXT NOT NULL,
//!     description TEXT,
//!     price       DOUBLE PRECISION NOT NULL,
//!     created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
//!     updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{ProductColumns, ProductRow};
use super::store::{ProductStore, StoreError};
use crate::domain::{NewProduct, PageRequest, Product, ProductId, ProductPatch};

/// Column list shared by every product query.
const PRODUCT_COLUMNS: &str = "id, name, description, price, created_at, updated_at";

/// PostgreSQL-backed product store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, fields: &NewProduct) -> Result<Product, StoreError> {
        let id = ProductId::generate();
        let row = sqlx::query_as::<_, ProductColumns>(&format!(
            "INSERT INTO products (id, name, description, price) \
             VALUES ($1, $2, $3, $4) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_str())
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Product::from(ProductRow::from(row)))
    }

    async fn find_many(&self, range: Option<PageRequest>) -> Result<Vec<Product>, StoreError> {
        let rows = if let Some(range) = range {
            sqlx::query_as::<_, ProductColumns>(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products \
                 ORDER BY created_at, id OFFSET $1 LIMIT $2"
            ))
            .bind(range.skip)
            .bind(range.take)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, ProductColumns>(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id"
            ))
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| Product::from(ProductRow::from(row)))
            .collect())
    }

    async fn find_unique(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, ProductColumns>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(|row| Product::from(ProductRow::from(row))))
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductColumns>(&format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 updated_at = now() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_str())
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(patch.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Product::from(ProductRow::from(row)))
    }

    async fn delete(&self, id: &ProductId) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductColumns>(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Product::from(ProductRow::from(row)))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductColumns>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE name ILIKE '%' || $1 || '%' ORDER BY created_at, id"
        ))
        .bind(keyword)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| Product::from(ProductRow::from(row)))
            .collect())
    }
}
