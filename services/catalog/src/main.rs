//! Catalog Service - 商品目录微服务

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use tracing::info;

use mall_adapter_postgres::{HealthChecker, PostgresConfig, check_connection, create_pool};
use mall_config::AppConfig;
use mall_telemetry::{init_metrics, init_tracing, init_tracing_json};

use catalog::api::{AppState, app};
use catalog::application::ProductHandler;
use catalog::infrastructure::persistence::PostgresProductRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config").context("failed to load configuration")?;

    if config.telemetry.json_logs {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }
    let metrics = init_metrics();

    info!(app = %config.app_name, env = %config.app_env, "Starting catalog service");

    let pg_config = PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections)
        .with_min_connections(config.database.min_connections);
    let pool = create_pool(&pg_config).await?;
    check_connection(&pool).await?;
    info!("Database connected");

    let repo = Arc::new(PostgresProductRepository::new(pool.clone()));
    let handler = Arc::new(ProductHandler::new(repo));

    let state = AppState {
        handler,
        health: HealthChecker::new(pool),
        metrics,
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Catalog service listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalog service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
