//! 应用层：路由装配

pub mod product;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use product::handler::AppState;

/// 产品接口的挂载路径
pub const PRODUCTS_PATH: &str = "/api/products";

/// 组装完整的应用路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .nest(PRODUCTS_PATH, product::router())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello World"
}
