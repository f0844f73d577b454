//! PostgreSQL repository implementation

use async_trait::async_trait;
use mall_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{Product, ProductId};
use crate::domain::repositories::{NewProduct, ProductChanges, ProductRepository};

use super::rows::ProductRow;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, new: NewProduct) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price, available, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("创建商品失败: {}", e)))?;

        Ok(row.into())
    }

    async fn count_active(&self) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE available = TRUE")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("统计商品失败: {}", e)))?;

        Ok(count as u64)
    }

    async fn list_active(&self, offset: u32, limit: u32) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, available, created_at, updated_at
            FROM products
            WHERE available = TRUE
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询商品列表失败: {}", e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_active(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, available, created_at, updated_at
            FROM products
            WHERE id = $1 AND available = TRUE
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询商品失败: {}", e)))?;

        Ok(row.map(Into::into))
    }

    async fn update_active(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> AppResult<Option<Product>> {
        // 单条条件 UPDATE，存在性检查与写入原子完成
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                updated_at = now()
            WHERE id = $1 AND available = TRUE
            RETURNING id, name, price, available, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(changes.name.as_deref())
        .bind(changes.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("更新商品失败: {}", e)))?;

        Ok(row.map(Into::into))
    }

    async fn deactivate(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET available = FALSE,
                updated_at = now()
            WHERE id = $1 AND available = TRUE
            RETURNING id, name, price, available, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("下架商品失败: {}", e)))?;

        Ok(row.map(Into::into))
    }
}
