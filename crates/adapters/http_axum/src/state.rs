//! Shared application state for axum handlers.

use std::sync::Arc;

use shoplite_app::ports::{CategoryRepository, ProductRepository, ReviewRepository};
use shoplite_app::services::category_service::CategoryService;
use shoplite_app::services::product_service::ProductService;
use shoplite_app::services::review_service::ReviewService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<CR, PR, RR> {
    /// Category CRUD service.
    pub category_service: Arc<CategoryService<CR, PR>>,
    /// Product CRUD service.
    pub product_service: Arc<ProductService<PR, RR>>,
    /// Review CRUD service.
    pub review_service: Arc<ReviewService<RR>>,
}

impl<CR, PR, RR> Clone for AppState<CR, PR, RR> {
    fn clone(&self) -> Self {
        Self {
            category_service: Arc::clone(&self.category_service),
            product_service: Arc::clone(&self.product_service),
            review_service: Arc::clone(&self.review_service),
        }
    }
}

impl<CR, PR, RR> AppState<CR, PR, RR>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        category_service: CategoryService<CR, PR>,
        product_service: ProductService<PR, RR>,
        review_service: ReviewService<RR>,
    ) -> Self {
        Self {
            category_service: Arc::new(category_service),
            product_service: Arc::new(product_service),
            review_service: Arc::new(review_service),
        }
    }
}
