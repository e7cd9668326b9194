//! Persistence layer: the product store contract and its backends.
//!
//! [`ProductStore`] is the opaque data-access seam consumed by the
//! service layer. The production implementation uses `sqlx::PgPool`;
//! tests inject an in-memory implementation instead.

pub mod models;
pub mod postgres;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use postgres::PgProductStore;
pub use store::{ProductStore, StoreError};
