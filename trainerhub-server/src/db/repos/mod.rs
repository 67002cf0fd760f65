//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Inserts return the stored row via `RETURNING` (no second round trip)
//! - Constraint violations are classified, not pre-checked (no check-then-insert)
//! - Reads that span both tables use a JOIN (no N+1)

pub mod trainers;
pub mod bookings;

pub use trainers::{Trainer, TrainerRepo};
pub use bookings::{Booking, BookingRepo, BookingWithTrainer, TrainerSummary};

use crate::error::Error;
use crate::models::ValidationError;

/// Turn a CHECK constraint failure into a validation error; anything else
/// stays a storage error.
pub(crate) fn classify_write_error(table: &'static str, err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db) = &err {
        if db.is_check_violation() {
            return ValidationError::Constraint {
                table,
                message: db.message().to_owned(),
            }
            .into();
        }
    }
    Error::Storage(err)
}
