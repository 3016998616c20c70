//! In-memory implementation of [`CategoryRepository`].

use std::sync::{Arc, Mutex};

use shoplite_app::ports::CategoryRepository;
use shoplite_domain::category::{Category, NewCategory};
use shoplite_domain::error::ShopError;
use shoplite_domain::id::CategoryId;

use crate::table::{Table, lock};

/// Mutex-guarded in-memory category table.
#[derive(Clone, Default)]
pub struct MemoryCategoryRepository {
    table: Arc<Mutex<Table<Category>>>,
}

impl MemoryCategoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for MemoryCategoryRepository {
    async fn create(&self, draft: NewCategory) -> Result<Category, ShopError> {
        let mut table = lock(&self.table);
        let category = Category {
            id: CategoryId::new(table.next_id()),
            name: draft.name,
        };
        table.rows.push(category.clone());
        Ok(category)
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, ShopError> {
        let table = lock(&self.table);
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Category>, ShopError> {
        let table = lock(&self.table);
        Ok(table.rows.clone())
    }

    async fn update(
        &self,
        id: CategoryId,
        draft: NewCategory,
    ) -> Result<Option<Category>, ShopError> {
        let mut table = lock(&self.table);
        let Some(category) = table.rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.name = draft.name;
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, ShopError> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        Ok(table.rows.len() < before)
    }
}
