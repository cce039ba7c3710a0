//! # 产品 CRUD 服务
//!
//! 单一 "product" 资源的 HTTP/JSON 接口，分层结构：
//! - `app`：路由、处理器、业务服务与存储接口
//! - `core`：统一错误处理与中间件
//! - `infrastructure`：数据库连接、存储实现与日志
//! - `config`：配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use std::sync::Arc;

use app::product::{handler::AppState, repository::ProductRepository, service::ProductService};

/// 基于给定存储构建应用状态
pub fn app_state(repository: Arc<dyn ProductRepository>) -> AppState {
    AppState::new(ProductService::new(repository))
}
