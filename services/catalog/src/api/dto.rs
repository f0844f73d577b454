//! API 请求/响应结构

use mall_common::PagedResult;
use serde::{Deserialize, Serialize};

use crate::application::commands::{CreateProductCommand, UpdateProductCommand};
use crate::domain::entities::Product;

/// 创建商品请求
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl From<CreateProductRequest> for CreateProductCommand {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

/// 更新商品请求
///
/// 载荷中允许出现 id 字段，但转换为命令时一律丢弃，目标商品以
/// 路径参数为准。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<UpdateProductRequest> for UpdateProductCommand {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

/// 分页元信息
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub last_page: u32,
}

/// 商品列表响应
#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}

impl From<PagedResult<Product>> for ListProductsResponse {
    fn from(result: PagedResult<Product>) -> Self {
        let meta = PageMeta {
            total: result.total,
            page: result.page,
            last_page: result.last_page(),
        };
        Self {
            data: result.items,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_drops_payload_id() {
        let req: UpdateProductRequest = serde_json::from_value(json!({
            "id": 99,
            "name": "Mouse",
        }))
        .unwrap();
        assert_eq!(req.id, Some(99));

        let cmd: UpdateProductCommand = req.into();
        assert_eq!(cmd.name.as_deref(), Some("Mouse"));
        assert_eq!(cmd.price, None);
        // UpdateProductCommand 没有 id 字段，载荷里的 id 到此为止
    }

    #[test]
    fn test_update_request_accepts_partial_body() {
        let req: UpdateProductRequest = serde_json::from_value(json!({ "price": 10.5 })).unwrap();
        assert_eq!(req.name, None);
        assert_eq!(req.price, Some(10.5));
    }
}
