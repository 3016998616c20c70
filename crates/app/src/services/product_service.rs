//! Product service — use-cases for managing products.

use std::collections::HashMap;

use shoplite_domain::error::{NotFoundError, ShopError};
use shoplite_domain::id::ProductId;
use shoplite_domain::product::{NewProduct, Product, ProductDetail};
use shoplite_domain::review::Review;

use crate::ports::{ProductRepository, ReviewRepository};

/// Application service for product CRUD operations.
///
/// Reads return [`ProductDetail`], whose `reviews` list is derived from the
/// review collection at query time. Deleting a review therefore disappears
/// from the product view without any bookkeeping here.
pub struct ProductService<PR, RR> {
    products: PR,
    reviews: RR,
}

impl<PR: ProductRepository, RR: ReviewRepository> ProductService<PR, RR> {
    /// Create a new service backed by the given repositories.
    pub fn new(products: PR, reviews: RR) -> Self {
        Self { products, reviews }
    }

    /// Create a new product after validating domain invariants.
    ///
    /// The referenced category is **not** required to exist.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if invariants fail, or a storage
    /// error propagated from the repository.
    pub async fn create_product(&self, draft: NewProduct) -> Result<ProductDetail, ShopError> {
        draft.validate()?;
        let product = self.products.create(draft).await?;
        // Reviews may reference a product id before it exists; pick them up.
        let reviews = self.reviews.find_by_product(product.id).await?;
        Ok(ProductDetail::new(product, reviews))
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] when no product with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_product(&self, id: ProductId) -> Result<ProductDetail, ShopError> {
        let product = self
            .products
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let reviews = self.reviews.find_by_product(id).await?;
        Ok(ProductDetail::new(product, reviews))
    }

    /// List all products with their derived `reviews` lists.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_products(&self) -> Result<Vec<ProductDetail>, ShopError> {
        let products = self.products.get_all().await?;
        let reviews = self.reviews.get_all().await?;

        let mut by_product: HashMap<ProductId, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_product.entry(review.product_id).or_default().push(review);
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let reviews = by_product.remove(&product.id).unwrap_or_default();
                ProductDetail::new(product, reviews)
            })
            .collect())
    }

    /// Replace an existing product's fields. Full replacement: every field
    /// takes the draft's value, including defaults the caller left unset.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if invariants fail,
    /// [`ShopError::NotFound`] if the id is absent, or a storage error.
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: NewProduct,
    ) -> Result<ProductDetail, ShopError> {
        draft.validate()?;
        let product = self
            .products
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        let reviews = self.reviews.find_by_product(id).await?;
        Ok(ProductDetail::new(product, reviews))
    }

    /// Delete a product by id. Reviews referencing it are left in place
    /// (no cascade).
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the id is absent, or a storage
    /// error from the repository.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ShopError> {
        if self.products.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id).into())
        }
    }
}

fn not_found(id: ProductId) -> NotFoundError {
    NotFoundError {
        entity: "Product",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplite_domain::error::ValidationError;
    use shoplite_domain::id::{CategoryId, ReviewId};
    use shoplite_domain::review::NewReview;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeProductRepo {
        inner: Mutex<(Vec<Product>, i64)>,
    }

    impl ProductRepository for FakeProductRepo {
        async fn create(&self, draft: NewProduct) -> Result<Product, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            inner.1 += 1;
            let product = Product {
                id: ProductId::new(inner.1),
                name: draft.name,
                price: draft.price,
                stock: draft.stock,
                category_id: draft.category_id,
            };
            inner.0.push(product.clone());
            Ok(product)
        }

        async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ShopError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.0.iter().find(|p| p.id == id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Product>, ShopError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.0.clone())
        }

        async fn find_by_category(
            &self,
            category_id: CategoryId,
        ) -> Result<Vec<Product>, ShopError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .0
                .iter()
                .filter(|p| p.category_id == category_id)
                .cloned()
                .collect())
        }

        async fn update(
            &self,
            id: ProductId,
            draft: NewProduct,
        ) -> Result<Option<Product>, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            let Some(product) = inner.0.iter_mut().find(|p| p.id == id) else {
                return Ok(None);
            };
            product.name = draft.name;
            product.price = draft.price;
            product.stock = draft.stock;
            product.category_id = draft.category_id;
            Ok(Some(product.clone()))
        }

        async fn delete(&self, id: ProductId) -> Result<bool, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.0.len();
            inner.0.retain(|p| p.id != id);
            Ok(inner.0.len() < before)
        }
    }

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

        async fn update(
            &self,
            _id: ReviewId,
            _draft: NewReview,
        ) -> Result<Option<Review>, ShopError> {
            unimplemented!("not exercised by product tests")
        }

        async fn delete(&self, id: ReviewId) -> Result<bool, ShopError> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.0.len();
            inner.0.retain(|r| r.id != id);
            Ok(inner.0.len() < before)
        }
    }

    fn make_service() -> ProductService<FakeProductRepo, FakeReviewRepo> {
        ProductService::new(FakeProductRepo::default(), FakeReviewRepo::default())
    }

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            price: 9.99,
            stock: 5,
            category_id: CategoryId::new(1),
        }
    }

    #[tokio::test]
    async fn should_create_product_with_empty_reviews() {
        let svc = make_service();

        let created = svc.create_product(widget()).await.unwrap();

        assert_eq!(created.product.id, ProductId::new(1));
        assert_eq!(created.product.name, "Widget");
        assert!((created.product.price - 9.99).abs() < f64::EPSILON);
        assert_eq!(created.product.stock, 5);
        assert!(created.reviews.is_empty());
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let svc = make_service();
        let mut draft = widget();
        draft.price = -1.0;

        let result = svc.create_product(draft).await;
        assert!(matches!(
            result,
            Err(ShopError::Validation(ValidationError::NegativePrice))
        ));
    }

    #[tokio::test]
    async fn should_derive_reviews_from_review_collection() {
        let svc = make_service();
        let created = svc.create_product(widget()).await.unwrap();
        let product_id = created.product.id;

        svc.reviews
            .create(NewReview {
                product_id,
                rating: 5,
                comment: "solid".to_string(),
            })
            .await
            .unwrap();

        let fetched = svc.get_product(product_id).await.unwrap();
        assert_eq!(fetched.reviews.len(), 1);
        assert_eq!(fetched.reviews[0].rating, 5);
    }

    #[tokio::test]
    async fn should_no_longer_embed_deleted_review() {
        let svc = make_service();
        let created = svc.create_product(widget()).await.unwrap();
        let product_id = created.product.id;

        let review = svc
            .reviews
            .create(NewReview {
                product_id,
                rating: 1,
                comment: "broke".to_string(),
            })
            .await
            .unwrap();
        svc.reviews.delete(review.id).await.unwrap();

        let fetched = svc.get_product(product_id).await.unwrap();
        assert!(fetched.reviews.is_empty());
    }

    #[tokio::test]
    async fn should_replace_all_fields_on_update() {
        let svc = make_service();
        let created = svc.create_product(widget()).await.unwrap();

        let updated = svc
            .update_product(
                created.product.id,
                NewProduct {
                    name: "Widget Pro".to_string(),
                    price: 19.99,
                    stock: 0,
                    category_id: CategoryId::new(2),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.product.name, "Widget Pro");
        assert_eq!(updated.product.stock, 0);
        assert_eq!(updated.product.category_id, CategoryId::new(2));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_product() {
        let svc = make_service();
        let result = svc.update_product(ProductId::new(9), widget()).await;
        assert!(matches!(result, Err(ShopError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_products_with_grouped_reviews() {
        let svc = make_service();
        let first = svc.create_product(widget()).await.unwrap();
        svc.create_product(widget()).await.unwrap();

        svc.reviews
            .create(NewReview {
                product_id: first.product.id,
                rating: 4,
                comment: String::new(),
            })
            .await
            .unwrap();

        let all = svc.list_products().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].reviews.len(), 1);
        assert!(all[1].reviews.is_empty());
    }

    #[tokio::test]
    async fn should_delete_product_without_cascading_to_reviews() {
        let svc = make_service();
        let created = svc.create_product(widget()).await.unwrap();
        let product_id = created.product.id;

        svc.reviews
            .create(NewReview {
                product_id,
                rating: 3,
                comment: String::new(),
            })
            .await
            .unwrap();

        svc.delete_product(product_id).await.unwrap();

        assert!(matches!(
            svc.get_product(product_id).await,
            Err(ShopError::NotFound(_))
        ));
        // The review survives with a dangling product reference.
        let orphans = svc.reviews.find_by_product(product_id).await.unwrap();
        assert_eq!(orphans.len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_product() {
        let svc = make_service();
        let result = svc.delete_product(ProductId::new(1)).await;
        assert!(matches!(result, Err(ShopError::NotFound(_))));
    }
}
