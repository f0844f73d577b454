//! catalog - 商品目录服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
