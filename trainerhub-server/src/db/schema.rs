//! Schema setup for the trainers and bookings tables

use sqlx::SqlitePool;

use crate::Result;

/// Create both tables if they don't exist yet.
///
/// Idempotent: running it against an initialized store changes nothing.
/// Call once at startup, before serving requests.
pub async fn initialize(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing trainerhub schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trainers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            sport       TEXT NOT NULL CHECK (length(trim(sport)) > 0),
            credentials TEXT NOT NULL CHECK (length(trim(credentials)) > 0),
            biography   TEXT NOT NULL CHECK (length(trim(biography)) > 0),
            contact     TEXT NOT NULL CHECK (length(trim(contact)) > 0),
            price       REAL NOT NULL CHECK (price >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            trainer_id         INTEGER NOT NULL REFERENCES trainers(id),
            parent_name        TEXT NOT NULL CHECK (length(trim(parent_name)) > 0),
            parent_contact     TEXT NOT NULL CHECK (length(trim(parent_contact)) > 0),
            preferred_datetime TEXT NOT NULL,
            notes              TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookings_trainer ON bookings(trainer_id)")
        .execute(pool)
        .await?;

    tracing::info!("Schema ready");
    Ok(())
}
