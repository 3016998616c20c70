//! JSON REST handlers for reviews.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use shoplite_app::ports::{CategoryRepository, ProductRepository, ReviewRepository};
use shoplite_domain::id::{ProductId, ReviewId};
use shoplite_domain::review::{NewReview, Review};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

/// Request body for creating a review.
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub product_id: ProductId,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// Request body for replacing a review. Omitted fields take their
/// default (zero) values — replacement, not merge.
#[derive(Deserialize)]
pub struct UpdateReviewRequest {
    #[serde(default)]
    pub product_id: ProductId,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Review>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Review>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Review>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Review>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/reviews`
pub async fn list<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_reviews().await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `GET /api/reviews/{id}`
pub async fn get<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<ReviewId>,
) -> Result<GetResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review = state.review_service.get_review(id).await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `POST /api/reviews`
pub async fn create<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    ApiJson(req): ApiJson<CreateReviewRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let draft = NewReview {
        product_id: req.product_id,
        rating: req.rating,
        comment: req.comment,
    };
    let created = state.review_service.create_review(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/reviews/{id}`
pub async fn update<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<ReviewId>,
    ApiJson(req): ApiJson<UpdateReviewRequest>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let draft = NewReview {
        product_id: req.product_id,
        rating: req.rating,
        comment: req.comment,
    };
    let updated = state.review_service.update_review(id, draft).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/reviews/{id}`
pub async fn delete<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<ReviewId>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    state.review_service.delete_review(id).await?;
    Ok(DeleteResponse::NoContent)
}
