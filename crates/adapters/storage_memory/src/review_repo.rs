//! In-memory implementation of [`ReviewRepository`].

use std::sync::{Arc, Mutex};

use shoplite_app::ports::ReviewRepository;
use shoplite_domain::error::ShopError;
use shoplite_domain::id::{ProductId, ReviewId};
use shoplite_domain::review::{NewReview, Review};

use crate::table::{Table, lock};

/// Mutex-guarded in-memory review table.
#[derive(Clone, Default)]
pub struct MemoryReviewRepository {
    table: Arc<Mutex<Table<Review>>>,
}

impl MemoryReviewRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, draft: NewReview) -> Result<Review, ShopError> {
        let mut table = lock(&self.table);
        let review = Review {
            id: ReviewId::new(table.next_id()),
            product_id: draft.product_id,
            rating: draft.rating,
            comment: draft.comment,
        };
        table.rows.push(review.clone());
        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, ShopError> {
        let table = lock(&self.table);
        Ok(table.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Review>, ShopError> {
        let table = lock(&self.table);
        Ok(table.rows.clone())
    }

    async fn find_by_product(&self, product_id: ProductId) -> Result<Vec<Review>, ShopError> {
        let table = lock(&self.table);
        Ok(table
            .rows
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: ReviewId, draft: NewReview) -> Result<Option<Review>, ShopError> {
        let mut table = lock(&self.table);
        let Some(review) = table.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        review.product_id = draft.product_id;
        review.rating = draft.rating;
        review.comment = draft.comment;
        Ok(Some(review.clone()))
    }

    async fn delete(&self, id: ReviewId) -> Result<bool, ShopError> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() < before)
    }
}
