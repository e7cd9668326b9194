//! Type-safe product identifier.
//!
//! [`ProductId`] is a newtype wrapper around the string identifier
//! assigned by the data store, providing type safety so that product
//! identifiers cannot be confused with other strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a product.
///
/// Wraps the UUID-v4 string assigned by the store at insert time.
/// Immutable once assigned; addresses exactly one product for the
/// lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generates a fresh random identifier (UUID v4).
    ///
    /// Called by store implementations when inserting a new record;
    /// callers never mint identifiers themselves.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_unique_ids() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generate_is_non_empty_uuid_format() {
        let id = ProductId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert!(id.as_str().contains('-'));
    }

    #[test]
    fn display_matches_inner_string() {
        let id = ProductId::from("p-1".to_string());
        assert_eq!(format!("{id}"), "p-1");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ProductId::from("p-1".to_string());
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"p-1\"");
        let back: ProductId = serde_json::from_str(&json).ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(id, back);
    }
}
