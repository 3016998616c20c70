//! Category service — use-cases for managing categories.

use std::collections::HashMap;

use shoplite_domain::category::{Category, CategoryDetail, NewCategory};
use shoplite_domain::error::{NotFoundError, ShopError};
use shoplite_domain::id::CategoryId;
use shoplite_domain::product::Product;

use crate::ports::{CategoryRepository, ProductRepository};

/// Application service for category CRUD operations.
///
/// Reads return [`CategoryDetail`], whose `items` list is derived from the
/// product collection at query time rather than stored alongside the
/// category.
pub struct CategoryService<CR, PR> {
    categories: CR,
    products: PR,
}

impl<CR: CategoryRepository, PR: ProductRepository> CategoryService<CR, PR> {
    /// Create a new service backed by the given repositories.
    pub fn new(categories: CR, products: PR) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Create a new category after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if invariants fail, or a storage
    /// error propagated from the repository.
    pub async fn create_category(&self, draft: NewCategory) -> Result<CategoryDetail, ShopError> {
        draft.validate()?;
        let category = self.categories.create(draft).await?;
        // Products may reference a category id before it exists; pick them up.
        let items = self.products.find_by_category(category.id).await?;
        Ok(CategoryDetail::new(category, items))
    }

    /// Look up a category by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_category(&self, id: CategoryId) -> Result<CategoryDetail, ShopError> {
        let category = self
            .categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let items = self.products.find_by_category(id).await?;
        Ok(CategoryDetail::new(category, items))
    }

    /// List all categories with their derived `items` lists.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_categories(&self) -> Result<Vec<CategoryDetail>, ShopError> {
        let categories = self.categories.get_all().await?;
        let products = self.products.get_all().await?;

        let mut by_category: HashMap<CategoryId, Vec<Product>> = HashMap::new();
        for product in products {
            by_category
                .entry(product.category_id)
                .or_default()
                .push(product);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let items = by_category.remove(&category.id).unwrap_or_default();
                CategoryDetail::new(category, items)
            })
            .collect())
    }

    /// Replace an existing category's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if invariants fail,
    /// [`ShopError::NotFound`] if the id is absent, or a storage error.
    pub async fn update_category(
        &self,
        id: CategoryId,
        draft: NewCategory,
    ) -> Result<CategoryDetail, ShopError> {
        draft.validate()?;
        let category = self
            .categories
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        let items = self.products.find_by_category(id).await?;
        Ok(CategoryDetail::new(category, items))
    }

    /// Delete a category by id. Products referencing it are left in place
    /// with a dangling `category_id` (no cascade).
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the id is absent, or a storage
    /// error from the repository.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ShopError> {
        if self.categories.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id).into())
        }
    }
}

fn not_found(id: CategoryId) -> NotFoundError {
    NotFoundError {
        entity: "Category",
        id: id.to_string(),
    }
}
