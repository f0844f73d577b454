//! 商品查询

use mall_common::Pagination;

use crate::domain::entities::ProductId;

/// 获取商品查询
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub id: ProductId,
}

/// 列表商品查询
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {
    pub pagination: Pagination,
}
