use std::net::SocketAddr;

use axum::Router;
use common::env::ensure_sqlite_dir;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file first (`CONFIG_PATH` or `config.toml`), then plain env vars.
///
/// `.env` must already be loaded; the binary does that before calling this.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable, falling back to environment");
            AppConfig { server: ServerConfig::from_env(), database: DatabaseConfig::from_env() }
        }
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Router over an already-migrated connection. Used by `run` and by tests.
pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState { db }, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}

/// Public entry: connect, migrate, and serve until ctrl-c.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    ensure_sqlite_dir(&cfg.database.url).await?;
    let db = models::db::connect_and_migrate(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let app = app(db);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e: std::net::AddrParseError| StartupError::InvalidConfig(e.to_string()))?;
    info!(%addr, "starting acronyms api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
