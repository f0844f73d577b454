//! API layer - axum HTTP 服务

pub mod dto;
pub mod error;

mod handlers;
mod routes;

pub use routes::{AppState, app};
