//! 内存仓储实现
//!
//! 语义与 PostgreSQL 实现一致，用于测试和本地开发。

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use mall_common::AuditInfo;
use mall_errors::AppResult;

use crate::domain::entities::{Product, ProductId};
use crate::domain::repositories::{NewProduct, ProductChanges, ProductRepository};

#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, new: NewProduct) -> AppResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id: ProductId(id),
            name: new.name,
            price: new.price,
            available: true,
            audit: AuditInfo::new(),
        };

        self.state
            .lock()
            .unwrap()
            .insert(id, product.clone());
        Ok(product)
    }

    async fn count_active(&self) -> AppResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.values().filter(|p| p.available).count() as u64)
    }

    async fn list_active(&self, offset: u32, limit: u32) -> AppResult<Vec<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .values()
            .filter(|p| p.available)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_active(&self, id: ProductId) -> AppResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.get(&id.0).filter(|p| p.available).cloned())
    }

    async fn update_active(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> AppResult<Option<Product>> {
        let mut state = self.state.lock().unwrap();
        let Some(product) = state.get_mut(&id.0).filter(|p| p.available) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        product.audit.touch();

        Ok(Some(product.clone()))
    }

    async fn deactivate(&self, id: ProductId) -> AppResult<Option<Product>> {
        let mut state = self.state.lock().unwrap();
        let Some(product) = state.get_mut(&id.0).filter(|p| p.available) else {
            return Ok(None);
        };

        product.available = false;
        product.audit.touch();

        Ok(Some(product.clone()))
    }
}
