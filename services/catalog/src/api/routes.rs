//! API 路由

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use mall_adapter_postgres::{HealthCheckResult, HealthChecker};

use crate::application::ProductHandler;

use super::handlers::{
    create_product, get_product, list_products, remove_product, update_product,
};

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ProductHandler>,
    pub health: HealthChecker,
    pub metrics: PrometheusHandle,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/{id}",
            get(get_product)
                .patch(update_product)
                .delete(remove_product),
        )
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: HealthCheckResult,
}

async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let database = state.health.check().await;
    Json(ReadinessResponse {
        ready: database.healthy,
        database,
    })
}

async fn metrics_handler(State(state): State<AppState>) -> String {
    state.metrics.render()
}
