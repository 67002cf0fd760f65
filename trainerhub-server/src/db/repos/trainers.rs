//! Trainer repository
//!
//! - insert: single INSERT ... RETURNING
//! - list: every trainer, oldest first

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::classify_write_error;
use crate::models::NewTrainer;
use crate::{Error, Result};

/// Trainer record from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Trainer {
    pub id: i64,
    pub sport: String,
    pub credentials: String,
    pub biography: String,
    pub contact: String,
    pub price: f64,
}

/// Trainer repository
pub struct TrainerRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainerRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated trainer and return the stored row with its new id.
    pub async fn insert(&self, trainer: &NewTrainer) -> Result<Trainer> {
        sqlx::query_as::<_, Trainer>(
            r#"
            INSERT INTO trainers (sport, credentials, biography, contact, price)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, sport, credentials, biography, contact, price
            "#,
        )
        .bind(trainer.sport())
        .bind(trainer.credentials())
        .bind(trainer.biography())
        .bind(trainer.contact())
        .bind(trainer.price().value())
        .fetch_one(self.pool)
        .await
        .map_err(|e| classify_write_error("trainers", e))
    }

    /// All trainers ordered by id. No pagination.
    pub async fn list(&self) -> Result<Vec<Trainer>> {
        let trainers = sqlx::query_as::<_, Trainer>(
            "SELECT id, sport, credentials, biography, contact, price FROM trainers ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(trainers)
    }

    /// Get a single trainer by id.
    pub async fn get(&self, id: i64) -> Result<Trainer> {
        sqlx::query_as::<_, Trainer>(
            "SELECT id, sport, credentials, biography, contact, price FROM trainers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| Error::trainer_not_found(id))
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trainers")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
