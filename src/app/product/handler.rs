//! 产品处理器
//!
//! 每个处理器只做一次存储调用，并把结果翻译成状态码；错误交给 `CoreError` 统一输出。

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::debug;

use super::{
    model::{Product, ProductInput, ProductPatch},
    service::ProductService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let Json(input) = payload.map_err(|rejection| CoreError::Request(rejection.body_text()))?;
    let product = state.product_service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    match state.product_service.get_product(&id).await? {
        Some(product) => Ok(Json(product)),
        None => {
            debug!("Product {} not found", id);
            Err(CoreError::NotFound)
        }
    }
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Json(patch) = payload.map_err(|rejection| CoreError::Request(rejection.body_text()))?;
    state
        .product_service
        .update_product(&id, patch)
        .await?
        .map(Json)
        .ok_or(CoreError::NotFound)
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    state
        .product_service
        .delete_product(&id)
        .await?
        .map(Json)
        .ok_or(CoreError::NotFound)
}
