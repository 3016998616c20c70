//! # shoplite-domain
//!
//! Pure domain model for the shoplite catalog service.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions
//! - Define **Categories** (named groupings of products)
//! - Define **Products** (priced, stocked items referencing a category)
//! - Define **Reviews** (rated comments referencing a product)
//! - Define the **detail read models** carrying the derived embedded lists
//!   (`CategoryDetail::items`, `ProductDetail::reviews`)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod category;
pub mod product;
pub mod review;
