//! # shoplite-adapter-storage-memory
//!
//! Process-local persistence adapter. Each repository owns a mutex-guarded
//! table (insertion-ordered rows plus a monotonically increasing id
//! counter), so concurrent requests serialize per table instead of racing
//! on shared collections. Data is lost on restart.
//!
//! Repositories are cheap handles: cloning one shares the underlying
//! table, which is how the same product table serves both the product
//! service and the category service's derived `items` reads.
//!
//! ## Dependency rule
//! Depends on `shoplite-app` (for port traits) and `shoplite-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod category_repo;
mod product_repo;
mod review_repo;
mod table;

pub use category_repo::MemoryCategoryRepository;
pub use product_repo::MemoryProductRepository;
pub use review_repo::MemoryReviewRepository;
