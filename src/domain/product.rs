//! Product entity and the value types used to create and mutate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog product as persisted by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier. Immutable once assigned.
    pub id: ProductId,
    /// Display name. Search matches against this field.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field set for inserting a new product. The identifier and timestamps
/// are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
}

/// Partial field set for updating a product. `None` fields are left
/// unchanged by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement price, if any.
    pub price: Option<f64>,
}

/// Offset window for a paginated `find_many` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of records to skip.
    pub skip: i64,
    /// Maximum number of records to return.
    pub take: i64,
}
