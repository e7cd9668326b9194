//! Service layer: resource-level operations over the product store.

pub mod product_service;

pub use product_service::{ProductListing, ProductService};
