//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use tracing::{info, warn};

/// Ensure the directory holding a file-backed SQLite database exists.
///
/// Postgres and in-memory URLs need nothing on disk and are left alone.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else { return Ok(()) };
    let Some(dir) = std::path::Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "sqlite data directory missing; creating it");
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    info!(path, "using sqlite database file");
    Ok(())
}

/// File path component of a `sqlite:` URL, `None` for other schemes and `:memory:`.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(path)
}
