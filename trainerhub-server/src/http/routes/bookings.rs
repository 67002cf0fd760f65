//! Booking endpoints
//!
//! A booking can be posted either under its trainer
//! (`/trainers/{id}/bookings`) or to `/bookings` with a `trainer_id` field.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};

use crate::db::{Booking, BookingWithTrainer};
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::{BookingForm, CreateBookingForm};
use crate::service;

/// POST /trainers/{id}/bookings
async fn book_trainer(
    State(state): State<Arc<AppState>>,
    RecordId(trainer_id): RecordId,
    Form(form): Form<BookingForm>,
) -> Result<(StatusCode, Json<BookingWithTrainer>), ApiError> {
    let booking = service::create_booking(&state.pool, trainer_id, form).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// POST /bookings - trainer reference travels in the form
async fn create_booking(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateBookingForm>,
) -> Result<(StatusCode, Json<BookingWithTrainer>), ApiError> {
    let booking = service::submit_booking(&state.pool, form).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /trainers/{id}/bookings
async fn list_trainer_bookings(
    State(state): State<Arc<AppState>>,
    RecordId(trainer_id): RecordId,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = service::get_trainer_bookings(&state.pool, trainer_id).await?;
    Ok(Json(bookings))
}

/// GET /bookings/{id}
async fn get_booking(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<BookingWithTrainer>, ApiError> {
    let booking = service::get_booking(&state.pool, id).await?;
    Ok(Json(booking))
}

/// Booking routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/trainers/{id}/bookings",
            get(list_trainer_bookings).post(book_trainer),
        )
        .route("/bookings", post(create_booking))
        .route("/bookings/{id}", get(get_booking))
}
