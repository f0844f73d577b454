//! 应用层 - 命令、查询与业务处理

pub mod commands;
pub mod queries;

mod handler;

pub use handler::ProductHandler;
