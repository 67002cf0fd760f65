//! Database connection pool management
//!
//! Uses a sqlx `SqlitePool` over a single database file. The file (and its
//! parent directory) is created when missing; tables are not, see
//! [`initialize`](super::schema::initialize).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::Result;

/// Default maximum connections for the pool.
/// Kept low for a single-file store.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "trainerhub.sqlite3";

/// Where the store lives
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_FILE),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// Open (or create) the SQLite database file at `path`.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("trainerhub.sqlite3")).await?;
/// initialize(&pool).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool> {
    create_pool_with_options(&StoreConfig::new(path)).await
}

/// Open (or create) the database described by `config`.
pub async fn create_pool_with_options(config: &StoreConfig) -> Result<SqlitePool> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", config.path.display()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(path = %config.path.display(), "opened sqlite pool");
    Ok(pool)
}

/// In-memory database on a single connection that never expires.
///
/// Every connection to `sqlite::memory:` is a separate database, so the pool
/// must never open a second one.
pub async fn create_memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_pool_acquires_connection() {
        let pool = create_memory_pool().await.unwrap();
        let row: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let pool = create_memory_pool().await.unwrap();
        let row: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    async fn file_pool_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("store.sqlite3");

        let pool = create_pool(&db_path).await.unwrap();
        let row: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();

        assert_eq!(row.0, 1);
        assert!(db_path.exists());
    }

    #[test]
    fn default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_DB_FILE));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
