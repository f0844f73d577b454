//! Business logic handler

use std::sync::Arc;

use mall_common::PagedResult;
use mall_errors::{AppError, AppResult};
use metrics::counter;
use tracing::{debug, info};

use crate::application::commands::{CreateProductCommand, UpdateProductCommand};
use crate::application::queries::{GetProductQuery, ListProductsQuery};
use crate::domain::entities::{Product, ProductId};
use crate::domain::repositories::{NewProduct, ProductChanges, ProductRepository};

/// 商品业务处理器
///
/// 仓储通过构造函数注入，处理器自身无状态，可跨请求共享。
pub struct ProductHandler {
    repo: Arc<dyn ProductRepository>,
}

impl ProductHandler {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// 创建商品
    pub async fn create(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        info!(name = %cmd.name, "Creating product");

        let product = self
            .repo
            .insert(NewProduct {
                name: cmd.name,
                price: cmd.price,
            })
            .await?;

        counter!("catalog_products_created_total").increment(1);
        info!(id = %product.id, "Product created");
        Ok(product)
    }

    /// 分页列出可用商品
    pub async fn list(&self, query: ListProductsQuery) -> AppResult<PagedResult<Product>> {
        let pagination = query.pagination;
        debug!(
            page = pagination.page,
            limit = pagination.limit,
            "Listing products"
        );

        let total = self.repo.count_active().await?;
        let items = self
            .repo
            .list_active(pagination.offset(), pagination.limit)
            .await?;

        Ok(PagedResult::new(items, total, &pagination))
    }

    /// 获取单个可用商品
    pub async fn get(&self, query: GetProductQuery) -> AppResult<Product> {
        self.repo
            .find_active(query.id)
            .await?
            .ok_or_else(|| not_found(query.id))
    }

    /// 更新可用商品，id 不可变
    pub async fn update(&self, id: ProductId, cmd: UpdateProductCommand) -> AppResult<Product> {
        info!(%id, "Updating product");

        let changes = ProductChanges {
            name: cmd.name,
            price: cmd.price,
        };

        self.repo
            .update_active(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 软删除商品，返回下架后的记录
    pub async fn remove(&self, id: ProductId) -> AppResult<Product> {
        info!(%id, "Removing product");

        let product = self
            .repo
            .deactivate(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        counter!("catalog_products_removed_total").increment(1);
        Ok(product)
    }
}

fn not_found(id: ProductId) -> AppError {
    AppError::not_found(format!("商品 {} 不存在", id))
}
