//! `SQLite` implementation of [`CategoryRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shoplite_app::ports::CategoryRepository;
use shoplite_domain::category::{Category, NewCategory};
use shoplite_domain::error::ShopError;
use shoplite_domain::id::CategoryId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Category`].
struct Wrapper(Category);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Category> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Category {
            id: CategoryId::new(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO categories (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT * FROM categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM categories ORDER BY id";
const UPDATE: &str = "UPDATE categories SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM categories WHERE id = ?";

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn create(
        &self,
        draft: NewCategory,
    ) -> impl Future<Output = Result<Category, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&draft.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Category {
                id: CategoryId::new(result.last_insert_rowid()),
                name: draft.name,
            })
        }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, ShopError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: CategoryId,
        draft: NewCategory,
    ) -> impl Future<Output = Result<Option<Category>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&draft.name)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }

            Ok(Some(Category {
                id,
                name: draft.name,
            }))
        }
    }

    fn delete(&self, id: CategoryId) -> impl Future<Output = Result<bool, ShopError>> + Send {
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
