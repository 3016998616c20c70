//! JSON REST handlers for products.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use shoplite_app::ports::{CategoryRepository, ProductRepository, ReviewRepository};
use shoplite_domain::id::{CategoryId, ProductId};
use shoplite_domain::product::{NewProduct, ProductDetail};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

/// Request body for creating a product.
#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category_id: CategoryId,
}

/// Request body for replacing a product. Omitted fields take their
/// default (zero) values — replacement, not merge.
#[derive(Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category_id: CategoryId,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ProductDetail>>),
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
    Ok(Json<ProductDetail>),
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
    Created(Json<ProductDetail>),
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
    Ok(Json<ProductDetail>),
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

/// `GET /api/products`
pub async fn list<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `GET /api/products/{id}`
pub async fn get<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<ProductId>,
) -> Result<GetResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let product = state.product_service.get_product(id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `POST /api/products`
pub async fn create<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let draft = NewProduct {
        name: req.name,
        price: req.price,
        stock: req.stock,
        category_id: req.category_id,
    };
    let created = state.product_service.create_product(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/products/{id}`
pub async fn update<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<ProductId>,
    ApiJson(req): ApiJson<UpdateProductRequest>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let draft = NewProduct {
        name: req.name,
        price: req.price,
        stock: req.stock,
        category_id: req.category_id,
    };
    let updated = state.product_service.update_product(id, draft).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/products/{id}`
pub async fn delete<CR, PR, RR>(
    State(state): State<AppState<CR, PR, RR>>,
    Path(id): Path<ProductId>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    state.product_service.delete_product(id).await?;
    Ok(DeleteResponse::NoContent)
}
