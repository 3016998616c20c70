//! JSON REST handlers for categories.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use shoplite_app::ports::{CategoryRepository, ProductRepository, ReviewRepository};
use shoplite_domain::category::{CategoryDetail, NewCategory};
use shoplite_domain::id::CategoryId;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

/// Request body for creating a category.
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Request body for replacing a category. Omitted fields take their
/// default values — replacement, not merge.
#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CategoryDetail>>),
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
    Ok(Json<CategoryDetail>),
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
    Created(Json<CategoryDetail>),
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
    Ok(Json<CategoryDetail>),
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

/// `GET /api/categories`
pub async fn list<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let categories = state.category_service.list_categories().await?;
    Ok(ListResponse::Ok(Json(categories)))
}

/// `GET /api/categories/{id}`
pub async fn get<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<CategoryId>,
) -> Result<GetResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let category = state.category_service.get_category(id).await?;
    Ok(GetResponse::Ok(Json(category)))
}

/// `POST /api/categories`
pub async fn create<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let draft = NewCategory { name: req.name };
    let created = state.category_service.create_category(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/categories/{id}`
pub async fn update<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<CategoryId>,
    ApiJson(req): ApiJson<UpdateCategoryRequest>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let draft = NewCategory { name: req.name };
    let updated = state.category_service.update_category(id, draft).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/categories/{id}`
pub async fn delete<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<CategoryId>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    state.category_service.delete_category(id).await?;
    Ok(DeleteResponse::NoContent)
}
