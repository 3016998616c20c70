//! Product — a priced, stocked item that references a category.

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ValidationError};
use crate::id::{CategoryId, ProductId};
use crate::review::Review;

/// A catalog item.
///
/// `category_id` is a plain reference: the category it names is not required
/// to exist, and deleting a category does not cascade here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category_id: CategoryId,
}

/// Draft for creating or replacing a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category_id: CategoryId,
}

impl NewProduct {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] when `name` is empty or `price`
    /// is negative. Stock cannot be negative by construction.
    pub fn validate(&self) -> Result<(), ShopError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice.into());
        }
        Ok(())
    }
}

/// A product together with its reviews, derived on read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub reviews: Vec<Review>,
}

impl ProductDetail {
    /// Pair a product with the reviews that reference it.
    #[must_use]
    pub fn new(product: Product, reviews: Vec<Review>) -> Self {
        Self { product, reviews }
    }
}
