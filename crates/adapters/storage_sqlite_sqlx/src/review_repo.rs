//! `SQLite` implementation of [`ReviewRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shoplite_app::ports::ReviewRepository;
use shoplite_domain::error::ShopError;
use shoplite_domain::id::{ProductId, ReviewId};
use shoplite_domain::review::{NewReview, Review};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Review`].
struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let product_id: i64 = row.try_get("product_id")?;
        let rating: i32 = row.try_get("rating")?;
        let comment: String = row.try_get("comment")?;

        Ok(Self(Review {
            id: ReviewId::new(id),
            product_id: ProductId::new(product_id),
            rating,
            comment,
        }))
    }
}

const INSERT: &str = "INSERT INTO reviews (product_id, rating, comment) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY id";
const SELECT_BY_PRODUCT: &str = "SELECT * FROM reviews WHERE product_id = ? ORDER BY id";
const UPDATE: &str = "UPDATE reviews SET product_id = ?, rating = ?, comment = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    fn create(&self, draft: NewReview) -> impl Future<Output = Result<Review, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(draft.product_id.get())
                .bind(draft.rating)
                .bind(&draft.comment)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Review {
                id: ReviewId::new(result.last_insert_rowid()),
                product_id: draft.product_id,
                rating: draft.rating,
                comment: draft.comment,
            })
        }
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Vec<Review>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PRODUCT)
                .bind(product_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: ReviewId,
        draft: NewReview,
    ) -> impl Future<Output = Result<Option<Review>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(draft.product_id.get())
                .bind(draft.rating)
                .bind(&draft.comment)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }

            Ok(Some(Review {
                id,
                product_id: draft.product_id,
                rating: draft.rating,
                comment: draft.comment,
            }))
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<bool, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
