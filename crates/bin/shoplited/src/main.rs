//! # shoplited — shoplite daemon
//!
//! Composition root that wires a storage backend to the HTTP adapter and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + environment overrides)
//! - Initialize tracing
//! - Construct the configured repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use axum::Router;
use shoplite_adapter_http_axum::router;
use shoplite_adapter_http_axum::state::AppState;
use shoplite_adapter_storage_memory::{
    MemoryCategoryRepository, MemoryProductRepository, MemoryReviewRepository,
};
use shoplite_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteCategoryRepository, SqliteProductRepository, SqliteReviewRepository,
};
use shoplite_app::services::category_service::CategoryService;
use shoplite_app::services::product_service::ProductService;
use shoplite_app::services::review_service::ReviewService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.as_str())
        .init();

    let app = match config.database.backend {
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage; data is lost on restart");
            memory_app()
        }
        StorageBackend::Sqlite => {
            tracing::info!(url = %config.database.url, "using SQLite storage");
            sqlite_app(&config.database.url).await?
        }
    };

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "shoplited listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wire the router against mutex-guarded in-memory tables.
///
/// The product and review repositories are cloned into two services each:
/// clones share the underlying table, which is what lets the category and
/// product services derive their embedded lists from live data.
fn memory_app() -> Router {
    let category_repo = MemoryCategoryRepository::new();
    let product_repo = MemoryProductRepository::new();
    let review_repo = MemoryReviewRepository::new();

    let state = AppState::new(
        CategoryService::new(category_repo, product_repo.clone()),
        ProductService::new(product_repo, review_repo.clone()),
        ReviewService::new(review_repo),
    );
    router::build(state)
}

/// Wire the router against a `SQLite` database, running migrations first.
async fn sqlite_app(database_url: &str) -> Result<Router, Box<dyn std::error::Error>> {
    let db = DbConfig {
        database_url: database_url.to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    let state = AppState::new(
        CategoryService::new(
            SqliteCategoryRepository::new(pool.clone()),
            SqliteProductRepository::new(pool.clone()),
        ),
        ProductService::new(
            SqliteProductRepository::new(pool.clone()),
            SqliteReviewRepository::new(pool.clone()),
        ),
        ReviewService::new(SqliteReviewRepository::new(pool)),
    );
    Ok(router::build(state))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown signal handler");
    }
}
