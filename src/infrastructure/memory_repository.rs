//! 内存产品存储
//!
//! 与 Postgres 实现语义一致，用于本地运行和测试。

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app::product::model::{NewProduct, Product, ProductPatch};
use crate::app::product::repository::{ProductRepository, StoreError};

#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    // 保持插入顺序
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let record = Product {
            id: Uuid::new_v4(),
            name: product.name,
            description: product.description,
            created_at: now,
            updated_at: now,
        };
        self.products.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply(&patch);
            product.clone()
        }))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id);
        Ok(index.map(|i| products.remove(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = MemoryProductRepository::new();
        for name in ["first", "second", "third"] {
            repo.create(new_product(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_update_returns_post_write_state() {
        let repo = MemoryProductRepository::new();
        let created = repo.create(new_product("phone")).await.unwrap();

        let patch = ProductPatch {
            name: Some("updated name".to_string()),
            description: None,
        };
        let updated = repo
            .find_by_id_and_update(created.id, patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "updated name");
        assert_eq!(updated.description, "phone description");
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = MemoryProductRepository::new();
        let created = repo.create(new_product("phone")).await.unwrap();

        let deleted = repo.find_by_id_and_delete(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(repo.find_by_id_and_delete(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let repo = MemoryProductRepository::new();
        let result = repo
            .find_by_id_and_update(Uuid::new_v4(), ProductPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
