//! 产品资源：模型、存储接口、服务与处理器

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};

use handler::{create_product, delete_product, get_product, list_products, update_product, AppState};

/// 产品路由，挂载路径由调用方决定
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
