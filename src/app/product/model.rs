//! 产品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 存储中的产品记录
///
/// 标识由存储生成，序列化时使用文档库惯用的 `_id` 键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建产品请求
///
/// 字段保持可选，缺失字段交给校验阶段报告，而不是在反序列化时拒绝。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(
        required(message = "Path `name` is required."),
        length(min = 1, message = "Path `name` is required.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Path `description` is required."),
        length(min = 1, message = "Path `description` is required.")
    )]
    pub description: Option<String>,
}

/// 更新产品请求，缺省字段保持原值
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct ProductPatch {
    #[validate(length(min = 1, message = "Path `name` is required."))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Path `description` is required."))]
    pub description: Option<String>,
}

/// 通过校验的新产品字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
}

impl Product {
    /// 按补丁覆盖字段并刷新更新时间
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        self.updated_at = Utc::now();
    }
}
