//! ProductHandler 集成测试
//!
//! 基于内存仓储验证商品生命周期、软删除与分页行为

use std::sync::Arc;

use mall_common::Pagination;
use mall_errors::AppError;

use catalog::application::ProductHandler;
use catalog::application::commands::{CreateProductCommand, UpdateProductCommand};
use catalog::application::queries::{GetProductQuery, ListProductsQuery};
use catalog::domain::entities::{Product, ProductId};
use catalog::infrastructure::persistence::InMemoryProductRepository;

// ============================================================
// 测试辅助函数
// ============================================================

fn new_handler() -> ProductHandler {
    ProductHandler::new(Arc::new(InMemoryProductRepository::new()))
}

async fn create_product(handler: &ProductHandler, name: &str, price: f64) -> Product {
    handler
        .create(CreateProductCommand {
            name: name.to_string(),
            price,
        })
        .await
        .unwrap()
}

async fn seed_products(handler: &ProductHandler, count: usize) {
    for i in 0..count {
        create_product(handler, &format!("product-{}", i), i as f64).await;
    }
}

fn list_query(page: u32, limit: u32) -> ListProductsQuery {
    ListProductsQuery {
        pagination: Pagination::new(page, limit),
    }
}

fn assert_not_found(err: AppError, id: ProductId) {
    assert!(matches!(err, AppError::NotFound(_)), "got: {:?}", err);
    assert_eq!(err.status_code(), 404);
    assert!(err.to_string().contains(&id.to_string()));
}

// ============================================================
// 生命周期
// ============================================================

#[tokio::test]
async fn test_create_assigns_id_and_available() {
    let handler = new_handler();
    let product = create_product(&handler, "Teclado", 75.0).await;

    assert_eq!(product.id, ProductId(1));
    assert!(product.available);
    assert_eq!(product.name, "Teclado");
    assert_eq!(product.price, 75.0);
}

#[tokio::test]
async fn test_get_missing_id_fails_not_found() {
    let handler = new_handler();
    let err = handler
        .get(GetProductQuery { id: ProductId(7) })
        .await
        .unwrap_err();
    assert_not_found(err, ProductId(7));
}

#[tokio::test]
async fn test_create_remove_get_fails_not_found_with_id_in_message() {
    let handler = new_handler();
    let product = create_product(&handler, "Monitor", 150.0).await;

    let removed = handler.remove(product.id).await.unwrap();
    assert!(!removed.available);
    assert_eq!(removed.id, product.id);

    let err = handler
        .get(GetProductQuery { id: product.id })
        .await
        .unwrap_err();
    assert_not_found(err, product.id);
}

#[tokio::test]
async fn test_remove_twice_second_fails_not_found() {
    let handler = new_handler();
    let product = create_product(&handler, "Mouse", 20.0).await;

    handler.remove(product.id).await.unwrap();
    let err = handler.remove(product.id).await.unwrap_err();
    assert_not_found(err, product.id);
}

#[tokio::test]
async fn test_update_on_removed_product_fails_not_found() {
    let handler = new_handler();
    let product = create_product(&handler, "Webcam", 45.0).await;
    handler.remove(product.id).await.unwrap();

    let err = handler
        .update(
            product.id,
            UpdateProductCommand {
                name: Some("X".to_string()),
                price: None,
            },
        )
        .await
        .unwrap_err();
    assert_not_found(err, product.id);
}

#[tokio::test]
async fn test_update_never_changes_id() {
    let handler = new_handler();
    let product = create_product(&handler, "Parlante", 30.0).await;

    let updated = handler
        .update(
            product.id,
            UpdateProductCommand {
                name: Some("Parlante Bluetooth".to_string()),
                price: Some(35.0),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.name, "Parlante Bluetooth");
    assert_eq!(updated.price, 35.0);
    assert!(updated.available);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let handler = new_handler();
    let product = create_product(&handler, "Cable", 5.0).await;

    let updated = handler
        .update(
            product.id,
            UpdateProductCommand {
                name: None,
                price: Some(6.5),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Cable");
    assert_eq!(updated.price, 6.5);
}

// ============================================================
// 分页
// ============================================================

#[tokio::test]
async fn test_list_paginates_with_caller_limit() {
    let handler = new_handler();
    seed_products(&handler, 12).await;

    let page1 = handler.list(list_query(1, 5)).await.unwrap();
    assert_eq!(page1.total, 12);
    assert_eq!(page1.last_page(), 3);
    assert_eq!(page1.items.len(), 5);

    // offset 随调用方 limit 变化，第二页紧接第一页
    let page2 = handler.list(list_query(2, 5)).await.unwrap();
    assert_eq!(page2.items.len(), 5);
    assert_eq!(page2.items[0].id, ProductId(6));

    let page3 = handler.list(list_query(3, 5)).await.unwrap();
    assert_eq!(page3.items.len(), 2);
}

#[tokio::test]
async fn test_list_beyond_last_page_is_empty_with_stable_meta() {
    let handler = new_handler();
    seed_products(&handler, 12).await;

    let beyond = handler.list(list_query(4, 5)).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 12);
    assert_eq!(beyond.last_page(), 3);
}

#[tokio::test]
async fn test_list_excludes_removed_products() {
    let handler = new_handler();
    seed_products(&handler, 3).await;
    handler.remove(ProductId(2)).await.unwrap();

    let result = handler.list(list_query(1, 10)).await.unwrap();
    assert_eq!(result.total, 2);
    assert_eq!(result.items.len(), 2);
    assert!(result.items.iter().all(|p| p.id != ProductId(2)));
    assert!(result.items.iter().all(|p| p.available));
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let handler = new_handler();
    let result = handler.list(list_query(1, 10)).await.unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.last_page(), 0);
}
