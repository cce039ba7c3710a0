//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::model::{NewProduct, Product, ProductInput, ProductPatch};
use super::repository::ProductRepository;
use crate::core::error::CoreError;

/// 校验消息按字段声明顺序拼接
const FIELD_ORDER: [&str; 2] = ["name", "description"];

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_product(&self, input: ProductInput) -> Result<Product, CoreError> {
        input
            .validate()
            .map_err(|errors| CoreError::Validation(validation_message(&errors)))?;

        let (Some(name), Some(description)) = (input.name, input.description) else {
            return Err(CoreError::Validation(
                "Product validation failed".to_string(),
            ));
        };

        let product = self
            .repository
            .create(NewProduct { name, description })
            .await?;
        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.repository.find_all().await?;
        debug!("Listed {} products", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, raw_id: &str) -> Result<Option<Product>, CoreError> {
        let id = parse_id(raw_id)?;
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn update_product(
        &self,
        raw_id: &str,
        patch: ProductPatch,
    ) -> Result<Option<Product>, CoreError> {
        let id = parse_id(raw_id)?;
        patch
            .validate()
            .map_err(|errors| CoreError::Validation(validation_message(&errors)))?;

        let updated = self.repository.find_by_id_and_update(id, patch).await?;
        if let Some(product) = &updated {
            info!("Updated product: {} ({})", product.name, product.id);
        }
        Ok(updated)
    }

    pub async fn delete_product(&self, raw_id: &str) -> Result<Option<Product>, CoreError> {
        let id = parse_id(raw_id)?;
        let deleted = self.repository.find_by_id_and_delete(id).await?;
        if let Some(product) = &deleted {
            info!("Deleted product: {} ({})", product.name, product.id);
        }
        Ok(deleted)
    }
}

/// 路径中的标识无法解析时视为存储层的类型转换失败
fn parse_id(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw).map_err(|_| CoreError::InvalidId(raw.to_string()))
}

/// 生成 `Product validation failed: name: ..., description: ...` 形式的消息
fn validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let details: Vec<String> = FIELD_ORDER
        .iter()
        .filter_map(|field| {
            let error = field_errors.get(*field)?.first()?;
            let message = error
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("Path `{}` is invalid.", field));
            Some(format!("{}: {}", field, message))
        })
        .collect();

    format!("Product validation failed: {}", details.join(", "))
}
