//! # shoplite-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): [`CategoryRepository`](ports::CategoryRepository),
//!   [`ProductRepository`](ports::ProductRepository),
//!   [`ReviewRepository`](ports::ReviewRepository)
//! - Define **driving/inbound ports** as use-case structs:
//!   [`CategoryService`](services::category_service::CategoryService),
//!   [`ProductService`](services::product_service::ProductService),
//!   [`ReviewService`](services::review_service::ReviewService)
//! - Assemble the derived embedded lists (`items`, `reviews`) from the
//!   authoritative collections instead of storing duplicates
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `shoplite-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
