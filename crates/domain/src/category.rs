//! Category — a named grouping of products.

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ValidationError};
use crate::id::CategoryId;
use crate::product::Product;

/// A named grouping that products reference via `category_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Draft for creating or replacing a [`Category`]. Carries no identifier;
/// the storage layer assigns one on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ShopError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// A category together with its products, derived on read.
///
/// The `items` list is never stored; it is assembled from the product
/// collection at query time, so it cannot drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<Product>,
}

impl CategoryDetail {
    /// Pair a category with the products that reference it.
    #[must_use]
    pub fn new(category: Category, items: Vec<Product>) -> Self {
        Self { category, items }
    }
}
