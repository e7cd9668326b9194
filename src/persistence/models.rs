//! Database row models for the `products` table.

use chrono::{DateTime, Utc};

use crate::domain::{Product, ProductId};

/// Raw column tuple returned by product queries, in declaration order.
pub type ProductColumns = (
    String,
    String,
    Option<String>,
    f64,
    DateTime<Utc>,
    DateTime<Utc>,
);

/// A product row from the `products` table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    /// Primary key (UUID-v4 string).
    pub id: String,
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<ProductColumns> for ProductRow {
    fn from((id, name, description, price, created_at, updated_at): ProductColumns) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::from(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
