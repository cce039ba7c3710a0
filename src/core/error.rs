//! 核心错误处理模块
//!
//! 所有处理器的错误都汇集到这里：未找到返回空的 404，其余一律 500 并携带消息文本。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::app::product::repository::StoreError;

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Cast to Uuid failed for value \"{0}\" at path \"_id\" for model \"Product\"")]
    InvalidId(String),

    /// 请求体无法解析
    #[error("{0}")]
    Request(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("not found")]
    NotFound,
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
            other => {
                error!("Request failed: {}", other);
                let body = ErrorResponse {
                    message: other.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
