//! Booking repository
//!
//! - insert: INSERT ... RETURNING id, then JOIN read-back, in one transaction
//! - unknown trainer: detected from the foreign-key violation, not pre-checked

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use super::classify_write_error;
use crate::models::NewBooking;
use crate::{Error, Result};

/// Booking record from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub trainer_id: i64,
    pub parent_name: String,
    pub parent_contact: String,
    pub preferred_datetime: NaiveDateTime,
    pub notes: String,
}

/// Trainer display fields shown alongside a booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerSummary {
    pub id: i64,
    pub sport: String,
    pub credentials: String,
    pub contact: String,
    pub price: f64,
}

/// Booking joined with the trainer it references
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingWithTrainer {
    #[serde(flatten)]
    pub booking: Booking,
    pub trainer: TrainerSummary,
}

const SELECT_WITH_TRAINER: &str = r#"
    SELECT
        b.id,
        b.trainer_id,
        b.parent_name,
        b.parent_contact,
        b.preferred_datetime,
        b.notes,
        t.sport,
        t.credentials,
        t.contact,
        t.price
    FROM bookings b
    JOIN trainers t ON t.id = b.trainer_id
    WHERE b.id = ?
"#;

impl BookingWithTrainer {
    fn from_row(row: &SqliteRow) -> Result<Self> {
        let trainer_id: i64 = row.try_get("trainer_id")?;
        Ok(Self {
            booking: Booking {
                id: row.try_get("id")?,
                trainer_id,
                parent_name: row.try_get("parent_name")?,
                parent_contact: row.try_get("parent_contact")?,
                preferred_datetime: row.try_get("preferred_datetime")?,
                notes: row.try_get("notes")?,
            },
            trainer: TrainerSummary {
                id: trainer_id,
                sport: row.try_get("sport")?,
                credentials: row.try_get("credentials")?,
                contact: row.try_get("contact")?,
                price: row.try_get("price")?,
            },
        })
    }
}

/// Booking repository
pub struct BookingRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookingRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a booking against `trainer_id`.
    ///
    /// Returns `NotFound` when the trainer doesn't exist; nothing is written
    /// in that case.
    pub async fn insert(&self, trainer_id: i64, booking: &NewBooking) -> Result<BookingWithTrainer> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO bookings (trainer_id, parent_name, parent_contact, preferred_datetime, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(trainer_id)
        .bind(booking.parent_name())
        .bind(booking.parent_contact())
        .bind(booking.preferred_datetime())
        .bind(booking.notes())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_foreign_key_violation()) {
                Error::trainer_not_found(trainer_id)
            } else {
                classify_write_error("bookings", e)
            }
        })?;

        let stored = fetch_with_trainer(&mut tx, id)
            .await?
            .ok_or_else(|| Error::booking_not_found(id))?;

        tx.commit().await?;
        Ok(stored)
    }

    /// Get a single booking with its trainer's display fields.
    pub async fn get(&self, id: i64) -> Result<BookingWithTrainer> {
        let mut conn = self.pool.acquire().await?;
        fetch_with_trainer(&mut conn, id)
            .await?
            .ok_or_else(|| Error::booking_not_found(id))
    }

    /// Bookings referencing `trainer_id`, ordered by id.
    pub async fn list_for_trainer(&self, trainer_id: i64) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, trainer_id, parent_name, parent_contact, preferred_datetime, notes
            FROM bookings
            WHERE trainer_id = ?
            ORDER BY id
            "#,
        )
        .bind(trainer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

async fn fetch_with_trainer(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<BookingWithTrainer>> {
    let row = sqlx::query(SELECT_WITH_TRAINER)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(BookingWithTrainer::from_row).transpose()
}
