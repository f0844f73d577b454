//! 商品 HTTP handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mall_common::Pagination;

use crate::application::queries::{GetProductQuery, ListProductsQuery};
use crate::domain::entities::{Product, ProductId};

use super::dto::{CreateProductRequest, ListProductsResponse, UpdateProductRequest};
use super::error::ApiResult;
use super::routes::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state.handler.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<ListProductsResponse>> {
    let result = state.handler.list(ListProductsQuery { pagination }).await?;
    Ok(Json(result.into()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Product>> {
    let product = state
        .handler
        .get(GetProductQuery { id: ProductId(id) })
        .await?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Json<Product>> {
    let product = state.handler.update(ProductId(id), req.into()).await?;
    Ok(Json(product))
}

pub async fn remove_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Product>> {
    let product = state.handler.remove(ProductId(id)).await?;
    Ok(Json(product))
}
