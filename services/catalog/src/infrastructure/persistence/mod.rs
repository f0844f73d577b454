//! 持久化实现

mod memory;
mod postgres;
mod rows;

pub use memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
