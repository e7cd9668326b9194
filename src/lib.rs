//! # product-api
//!
//! REST API for a PostgreSQL-backed product catalog.
//!
//! This crate exposes CRUD, pagination, and keyword search over a single
//! `Product` resource. All persistence is delegated to PostgreSQL through
//! the store trait in `persistence/` — the service layer is a stateless
//! translation between resource commands and store calls.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ProductService (service/)
//!     │
//!     ├── ProductStore trait (persistence/)
//!     │
//!     └── PostgreSQL (sqlx)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
