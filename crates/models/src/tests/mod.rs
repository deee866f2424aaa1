use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, DatabaseConfig};



/// Relation traversal and pivot edge tests
mod relation_tests;

/// Fresh, fully migrated in-memory SQLite database.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    connect_and_migrate(&cfg).await
}
