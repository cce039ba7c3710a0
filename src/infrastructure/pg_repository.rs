//! 基于 Postgres 的产品存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::app::product::model::{NewProduct, Product, ProductPatch};
use crate::app::product::repository::{ProductRepository, StoreError};

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, StoreError> {
        let record = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&product.name)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let records = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let record = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        // RETURNING 给出的是更新后的行
        let record = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let record = sqlx::query_as::<_, Product>("DELETE FROM products WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}
