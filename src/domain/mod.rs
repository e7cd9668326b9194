//! Domain layer: product identity and entity types.
//!
//! Contains the persisted `Product` entity, the value types used for
//! insertion and partial update, and the offset window passed down to
//! the store for paginated listing.

pub mod product;
pub mod product_id;

pub use product::{NewProduct, PageRequest, Product, ProductPatch};
pub use product_id::ProductId;
