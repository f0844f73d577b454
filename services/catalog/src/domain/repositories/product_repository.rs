//! 商品仓储接口

use async_trait::async_trait;
use mall_errors::AppResult;

use crate::domain::entities::{Product, ProductId};

/// 新建商品的字段
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// 部分更新的字段集，None 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// 商品仓储
///
/// 读取、更新、删除只作用于 available = true 的记录；更新与删除以单条
/// 条件写入实现，存在性检查与写入之间没有竞争窗口。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入新商品，available 由存储默认置为 true
    async fn insert(&self, new: NewProduct) -> AppResult<Product>;

    /// 统计可用商品数
    async fn count_active(&self) -> AppResult<u64>;

    /// 按 id 升序分页列出可用商品
    async fn list_active(&self, offset: u32, limit: u32) -> AppResult<Vec<Product>>;

    /// 按 id 查找可用商品
    async fn find_active(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// 条件更新可用商品，None 表示记录不存在或已下架
    async fn update_active(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> AppResult<Option<Product>>;

    /// 软删除：将可用商品置为不可用，返回更新后的记录
    async fn deactivate(&self, id: ProductId) -> AppResult<Option<Product>>;
}
