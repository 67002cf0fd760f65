//! Command implementations for the trainerhub CLI

pub mod init_db;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trainerhub_server::db::{create_pool, initialize, SqlitePool, DEFAULT_DB_FILE};

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Database location shared by every command that touches the store
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// SQLite database file (created if missing)
    #[arg(long, env = "TRAINERHUB_DB", default_value = DEFAULT_DB_FILE)]
    pub db_path: PathBuf,
}

impl StoreArgs {
    /// Open the store and make sure both tables exist.
    pub async fn open_initialized(&self) -> Result<SqlitePool> {
        let pool = create_pool(&self.db_path)
            .await
            .with_context(|| format!("Failed to open database {}", self.db_path.display()))?;

        initialize(&pool)
            .await
            .context("Failed to initialize database schema")?;

        Ok(pool)
    }
}
