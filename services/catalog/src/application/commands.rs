//! 商品命令

/// 创建商品命令
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: f64,
}

/// 更新商品命令
///
/// 目标商品由路径上的 id 决定；载荷中出现的 id 在 API 层即被丢弃，
/// 不会进入命令。
#[derive(Debug, Clone, Default)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub price: Option<f64>,
}
