//! # shoplite-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **REST JSON API** (`/api/categories`, `/api/products`,
//!   `/api/reviews`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Conventions
//! - Collection routes accept `GET` (list) and `POST` (create).
//! - Item routes accept `GET`, `PUT` (full replacement), and `DELETE`.
//! - Everything else on a known path is `405`; a non-integer id is `400`;
//!   a malformed body is `400`; a missing entity is `404`.
//!
//! ## Dependency rule
//! Depends on `shoplite-app` (for port traits and services) and
//! `shoplite-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
