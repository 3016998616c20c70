//! Review — a rated comment attached to a product.

use serde::{Deserialize, Serialize};

use crate::id::{ProductId, ReviewId};

/// A review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    /// Intentionally unconstrained; clients decide their own scale.
    pub rating: i32,
    /// May be empty.
    pub comment: String,
}

/// Draft for creating or replacing a [`Review`].
///
/// `product_id` is not checked against the product collection; a review may
/// reference a product that never existed or was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: i32,
    pub comment: String,
}
