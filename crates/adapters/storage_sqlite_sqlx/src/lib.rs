//! # shoplite-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `shoplite-app`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Each operation is a single SQL statement; no operation spans more than
//! one table, so no transactions are needed.
//!
//! ## Dependency rule
//! Depends on `shoplite-app` (for port traits) and `shoplite-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod category_repo;
mod error;
mod pool;
mod product_repo;
mod review_repo;

pub use category_repo::SqliteCategoryRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use product_repo::SqliteProductRepository;
pub use review_repo::SqliteReviewRepository;
