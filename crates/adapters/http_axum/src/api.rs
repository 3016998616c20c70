//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;

use axum::Router;
use axum::routing::get;

use shoplite_app::ports::{CategoryRepository, ProductRepository, ReviewRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<CR, PR, RR>() -> Router<AppState<CR, PR, RR>>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        // Categories
        .route(
            "/categories",
            get(categories::list::<CR, PR, RR>).post(categories::create::<CR, PR, RR>),
        )
        .route(
            "/categories/{id}",
            get(categories::get::<CR, PR, RR>)
                .put(categories::update::<CR, PR, RR>)
                .delete(categories::delete::<CR, PR, RR>),
        )
        // Products
        .route(
            "/products",
            get(products::list::<CR, PR, RR>).post(products::create::<CR, PR, RR>),
        )
        .route(
            "/products/{id}",
            get(products::get::<CR, PR, RR>)
                .put(products::update::<CR, PR, RR>)
                .delete(products::delete::<CR, PR, RR>),
        )
        // Reviews
        .route(
            "/reviews",
            get(reviews::list::<CR, PR, RR>).post(reviews::create::<CR, PR, RR>),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get::<CR, PR, RR>)
                .put(reviews::update::<CR, PR, RR>)
                .delete(reviews::delete::<CR, PR, RR>),
        )
}
