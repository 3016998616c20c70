//! In-memory implementation of [`ProductRepository`].

use std::sync::{Arc, Mutex};

use shoplite_app::ports::ProductRepository;
use shoplite_domain::error::ShopError;
use shoplite_domain::id::{CategoryId, ProductId};
use shoplite_domain::product::{NewProduct, Product};

use crate::table::{Table, lock};

/// Mutex-guarded in-memory product table.
#[derive(Clone, Default)]
pub struct MemoryProductRepository {
    table: Arc<Mutex<Table<Product>>>,
}

impl MemoryProductRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for MemoryProductRepository {
    async fn create(&self, draft: NewProduct) -> Result<Product, ShopError> {
        let mut table = lock(&self.table);
        let product = Product {
            id: ProductId::new(table.next_id()),
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            category_id: draft.category_id,
        };
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ShopError> {
        let table = lock(&self.table);
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Product>, ShopError> {
        let table = lock(&self.table);
        Ok(table.rows.clone())
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ShopError> {
        let table = lock(&self.table);
        Ok(table
            .rows
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: ProductId, draft: NewProduct) -> Result<Option<Product>, ShopError> {
        let mut table = lock(&self.table);
        let Some(product) = table.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.name = draft.name;
        product.price = draft.price;
        product.stock = draft.stock;
        product.category_id = draft.category_id;
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, ShopError> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok(table.rows.len() < before)
    }
}
