//! `SQLite` implementation of [`ProductRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shoplite_app::ports::ProductRepository;
use shoplite_domain::error::ShopError;
use shoplite_domain::id::{CategoryId, ProductId};
use shoplite_domain::product::{NewProduct, Product};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Product`].
struct Wrapper(Product);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Product> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let price: f64 = row.try_get("price")?;
        let stock: u32 = row.try_get("stock")?;
        let category_id: i64 = row.try_get("category_id")?;

        Ok(Self(Product {
            id: ProductId::new(id),
            name,
            price,
            stock,
            category_id: CategoryId::new(category_id),
        }))
    }
}

const INSERT: &str = "INSERT INTO products (name, price, stock, category_id) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM products WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM products ORDER BY id";
const SELECT_BY_CATEGORY: &str = "SELECT * FROM products WHERE category_id = ? ORDER BY id";
const UPDATE: &str = "UPDATE products SET name = ?, price = ?, stock = ?, category_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = ?";

/// `SQLite`-backed product repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create(&self, draft: NewProduct) -> impl Future<Output = Result<Product, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&draft.name)
                .bind(draft.price)
                .bind(draft.stock)
                .bind(draft.category_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Product {
                id: ProductId::new(result.last_insert_rowid()),
                name: draft.name,
                price: draft.price,
                stock: draft.stock,
                category_id: draft.category_id,
            })
        }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ShopError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_category(
        &self,
        category_id: CategoryId,
    ) -> impl Future<Output = Result<Vec<Product>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CATEGORY)
                .bind(category_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: ProductId,
        draft: NewProduct,
    ) -> impl Future<Output = Result<Option<Product>, ShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&draft.name)
                .bind(draft.price)
                .bind(draft.stock)
                .bind(draft.category_id.get())
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }

            Ok(Some(Product {
                id,
                name: draft.name,
                price: draft.price,
                stock: draft.stock,
                category_id: draft.category_id,
            }))
        }
    }

    fn delete(&self, id: ProductId) -> impl Future<Output = Result<bool, ShopError>> + Send {
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
