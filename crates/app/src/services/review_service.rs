//! Review service — use-cases for managing reviews.

use shoplite_domain::error::{NotFoundError, ShopError};
use shoplite_domain::id::ReviewId;
use shoplite_domain::review::{NewReview, Review};

use crate::ports::ReviewRepository;

/// Application service for review CRUD operations.
///
/// Creating or deleting a review needs no product-side bookkeeping: the
/// product view derives its `reviews` list from this collection on read.
pub struct ReviewService<RR> {
    reviews: RR,
}

impl<RR: ReviewRepository> ReviewService<RR> {
    /// Create a new service backed by the given repository.
    pub fn new(reviews: RR) -> Self {
        Self { reviews }
    }

    /// Create a new review. The referenced product is **not** required to
    /// exist, and the rating is intentionally unconstrained.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_review(&self, draft: NewReview) -> Result<Review, ShopError> {
        self.reviews.create(draft).await
    }

    /// Look up a review by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] when no review with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, ShopError> {
        self.reviews
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// List all reviews.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ShopError> {
        self.reviews.get_all().await
    }

    /// Replace an existing review's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the id is absent, or a storage
    /// error from the repository.
    pub async fn update_review(&self, id: ReviewId, draft: NewReview) -> Result<Review, ShopError> {
        self.reviews
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the id is absent, or a storage
    /// error from the repository.
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), ShopError> {
        if self.reviews.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id).into())
        }
    }
}

fn not_found(id: ReviewId) -> NotFoundError {
    NotFoundError {
        entity: "Review",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplite_domain::id::ProductId;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeReviewRepo {
        inner: Mutex<(Vec<Review>, i64)>,
    }

    impl ReviewRepository for FakeReviewRepo {
        async fn create(&self, draft: NewReview) -> Result<Review, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            inner.1 += 1;
            let review = Review {
                id: ReviewId::new(inner.1),
                product_id: draft.product_id,
                rating: draft.rating,
                comment: draft.comment,
            };
            inner.0.push(review.clone());
            Ok(review)
        }

        async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, ShopError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.0.iter().find(|r| r.id == id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Review>, ShopError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.0.clone())
        }

        async fn find_by_product(&self, product_id: ProductId) -> Result<Vec<Review>, ShopError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .0
                .iter()
                .filter(|r| r.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn update(&self, id: ReviewId, draft: NewReview) -> Result<Option<Review>, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            let Some(review) = inner.0.iter_mut().find(|r| r.id == id) else {
                return Ok(None);
            };
            review.product_id = draft.product_id;
            review.rating = draft.rating;
            review.comment = draft.comment;
            Ok(Some(review.clone()))
        }

        async fn delete(&self, id: ReviewId) -> Result<bool, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.0.len();
            inner.0.retain(|r| r.id != id);
            Ok(inner.0.len() < before)
        }
    }

    fn make_service() -> ReviewService<FakeReviewRepo> {
        ReviewService::new(FakeReviewRepo::default())
    }

    fn draft(rating: i32) -> NewReview {
        NewReview {
            product_id: ProductId::new(1),
            rating,
            comment: "fine".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_and_fetch_review() {
        let svc = make_service();
        let created = svc.create_review(draft(5)).await.unwrap();

        let fetched = svc.get_review(created.id).await.unwrap();
        assert_eq!(fetched.rating, 5);
        assert_eq!(fetched.product_id, ProductId::new(1));
    }

    #[tokio::test]
    async fn should_accept_out_of_range_rating() {
        let svc = make_service();
        let created = svc.create_review(draft(-100)).await.unwrap();
        assert_eq!(created.rating, -100);
    }

    #[tokio::test]
    async fn should_return_not_found_when_review_missing() {
        let svc = make_service();
        let result = svc.get_review(ReviewId::new(8)).await;
        assert!(matches!(result, Err(ShopError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_reviews() {
        let svc = make_service();
        svc.create_review(draft(1)).await.unwrap();
        svc.create_review(draft(2)).await.unwrap();

        let all = svc.list_reviews().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_review() {
        let svc = make_service();
        let created = svc.create_review(draft(2)).await.unwrap();

        let updated = svc
            .update_review(
                created.id,
                NewReview {
                    product_id: ProductId::new(2),
                    rating: 4,
                    comment: "better than expected".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.rating, 4);
        assert_eq!(updated.product_id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_review() {
        let svc = make_service();
        let result = svc.update_review(ReviewId::new(4), draft(1)).await;
        assert!(matches!(result, Err(ShopError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_review() {
        let svc = make_service();
        let created = svc.create_review(draft(3)).await.unwrap();

        svc.delete_review(created.id).await.unwrap();

        let result = svc.get_review(created.id).await;
        assert!(matches!(result, Err(ShopError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let svc = make_service();
        let first = svc.create_review(draft(1)).await.unwrap();
        svc.delete_review(first.id).await.unwrap();

        let second = svc.create_review(draft(2)).await.unwrap();
        assert_eq!(second.id, ReviewId::new(2));
    }
}
