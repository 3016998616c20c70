//! Storage ports — repository traits for persistence.
//!
//! One trait per entity. The contract is identical across entities:
//! `create` takes an id-less draft and returns the stored row with its
//! assigned identifier; `update` returns `None` and `delete` returns
//! `false` when the id does not exist, leaving not-found policy to the
//! service layer.
//!
//! Identifier assignment is the repository's responsibility: ids are
//! positive, strictly increasing per entity type, and never reused.

use std::future::Future;

use shoplite_domain::category::{Category, NewCategory};
use shoplite_domain::error::ShopError;
use shoplite_domain::id::{CategoryId, ProductId, ReviewId};
use shoplite_domain::product::{NewProduct, Product};
use shoplite_domain::review::{NewReview, Review};

/// Persistence operations for categories.
pub trait CategoryRepository {
    /// Store a new category, assigning its identifier.
    fn create(
        &self,
        draft: NewCategory,
    ) -> impl Future<Output = Result<Category, ShopError>> + Send;

    /// Fetch a category by id.
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, ShopError>> + Send;

    /// Fetch all categories in id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, ShopError>> + Send;

    /// Replace a category's fields, returning `None` if the id is absent.
    fn update(
        &self,
        id: CategoryId,
        draft: NewCategory,
    ) -> impl Future<Output = Result<Option<Category>, ShopError>> + Send;

    /// Remove a category, returning `false` if the id is absent.
    fn delete(&self, id: CategoryId) -> impl Future<Output = Result<bool, ShopError>> + Send;
}

/// Persistence operations for products.
pub trait ProductRepository {
    /// Store a new product, assigning its identifier.
    fn create(
        &self,
        draft: NewProduct,
    ) -> impl Future<Output = Result<Product, ShopError>> + Send;

    /// Fetch a product by id.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ShopError>> + Send;

    /// Fetch all products in id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ShopError>> + Send;

    /// Fetch the products referencing `category_id`, in id order.
    fn find_by_category(
        &self,
        category_id: CategoryId,
    ) -> impl Future<Output = Result<Vec<Product>, ShopError>> + Send;

    /// Replace a product's fields, returning `None` if the id is absent.
    fn update(
        &self,
        id: ProductId,
        draft: NewProduct,
    ) -> impl Future<Output = Result<Option<Product>, ShopError>> + Send;

    /// Remove a product, returning `false` if the id is absent.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<bool, ShopError>> + Send;
}

/// Persistence operations for reviews.
pub trait ReviewRepository {
    /// Store a new review, assigning its identifier.
    fn create(&self, draft: NewReview) -> impl Future<Output = Result<Review, ShopError>> + Send;

    /// Fetch a review by id.
    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, ShopError>> + Send;

    /// Fetch all reviews in id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, ShopError>> + Send;

    /// Fetch the reviews referencing `product_id`, in id order.
    fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Vec<Review>, ShopError>> + Send;

    /// Replace a review's fields, returning `None` if the id is absent.
    fn update(
        &self,
        id: ReviewId,
        draft: NewReview,
    ) -> impl Future<Output = Result<Option<Review>, ShopError>> + Send;

    /// Remove a review, returning `false` if the id is absent.
    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<bool, ShopError>> + Send;
}
