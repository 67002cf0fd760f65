//! Listing, registration and booking operations
//!
//! Each operation takes the pool explicitly, validates its form before any
//! SQL runs, and performs at most one write.

use sqlx::SqlitePool;

use crate::db::{Booking, BookingRepo, BookingWithTrainer, Trainer, TrainerRepo};
use crate::models::{BookingForm, CreateBookingForm, NewBooking, NewTrainer, TrainerForm};
use crate::Result;

/// Every registered trainer, ordered by id.
pub async fn get_trainers(pool: &SqlitePool) -> Result<Vec<Trainer>> {
    TrainerRepo::new(pool).list().await
}

pub async fn get_trainer(pool: &SqlitePool, id: i64) -> Result<Trainer> {
    TrainerRepo::new(pool).get(id).await
}

/// Validate a registration form and store the trainer.
pub async fn register_trainer(pool: &SqlitePool, form: TrainerForm) -> Result<Trainer> {
    let new_trainer = NewTrainer::try_from(form)?;
    let trainer = TrainerRepo::new(pool).insert(&new_trainer).await?;

    tracing::info!(trainer_id = trainer.id, sport = %trainer.sport, "trainer registered");
    Ok(trainer)
}

/// Validate a booking form and store it against `trainer_id`.
///
/// Field errors are reported before the trainer reference is checked.
pub async fn create_booking(
    pool: &SqlitePool,
    trainer_id: i64,
    form: BookingForm,
) -> Result<BookingWithTrainer> {
    let new_booking = NewBooking::try_from(form)?;
    store_booking(pool, trainer_id, &new_booking).await
}

/// Same as [`create_booking`] for a form that carries its own `trainer_id`.
pub async fn submit_booking(
    pool: &SqlitePool,
    form: CreateBookingForm,
) -> Result<BookingWithTrainer> {
    let (trainer_id, new_booking) = form.validate()?;
    store_booking(pool, trainer_id, &new_booking).await
}

async fn store_booking(
    pool: &SqlitePool,
    trainer_id: i64,
    new_booking: &NewBooking,
) -> Result<BookingWithTrainer> {
    let booking = BookingRepo::new(pool).insert(trainer_id, new_booking).await?;

    tracing::info!(
        booking_id = booking.booking.id,
        trainer_id,
        preferred_datetime = %booking.booking.preferred_datetime,
        "booking requested"
    );
    Ok(booking)
}

pub async fn get_booking(pool: &SqlitePool, id: i64) -> Result<BookingWithTrainer> {
    BookingRepo::new(pool).get(id).await
}

/// Bookings for one trainer; `NotFound` if the trainer doesn't exist.
pub async fn get_trainer_bookings(pool: &SqlitePool, trainer_id: i64) -> Result<Vec<Booking>> {
    TrainerRepo::new(pool).get(trainer_id).await?;
    BookingRepo::new(pool).list_for_trainer(trainer_id).await
}
