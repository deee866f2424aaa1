#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, DatabaseConfig};

/// Open a private in-memory database with the full schema applied.
///
/// Each call yields an isolated database, so tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    connect_and_migrate(&cfg).await
}
