//! 商品实体

use derive_more::{Display, From};
use mall_common::AuditInfo;
use serde::{Deserialize, Serialize};

/// 商品 ID，由存储自增分配，不可变
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct ProductId(pub i64);

/// 商品实体
///
/// `available = false` 表示已软删除，对读取、更新、删除而言等同于不存在。
/// 生命周期：创建（available = true）→ 更新（字段可变，id 不变）→
/// 下架（available = false，终态）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub available: bool,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Product {
    /// 对外是否可见
    pub fn is_active(&self) -> bool {
        self.available
    }
}
