//! 数据库行结构

use chrono::{DateTime, Utc};
use mall_common::AuditInfo;
use sqlx::FromRow;

use crate::domain::entities::{Product, ProductId};

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            name: row.name,
            price: row.price,
            available: row.available,
            audit: AuditInfo {
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}
