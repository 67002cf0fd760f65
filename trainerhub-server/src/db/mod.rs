//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One `SqlitePool` built at startup and passed explicitly, no global handle
//! - Schema created by an explicit idempotent `initialize` step
//! - Rely on DB constraints (CHECK, FOREIGN KEY), classify their failures
//! - Transactions only where an insert is read back

pub mod pool;
pub mod schema;
pub mod repos;

pub use pool::{
    create_memory_pool, create_pool, create_pool_with_options, StoreConfig, DEFAULT_DB_FILE,
};
pub use schema::initialize;
pub use repos::*;

pub use sqlx::SqlitePool;
