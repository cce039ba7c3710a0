//! 产品存储抽象

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::model::{NewProduct, Product, ProductPatch};

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Backend(String),
}

/// 产品存储接口
///
/// 查找类操作在记录不存在时返回 `Ok(None)`，只有存储本身失败才返回错误。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// 按插入顺序返回全部记录
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// 返回写入之后的记录
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError>;

    /// 返回被删除的记录
    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Product>, StoreError>;
}
