//! Trainer endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Form, Json, Router};

use crate::db::Trainer;
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::TrainerForm;
use crate::service;

/// GET /trainers - list every trainer
async fn list_trainers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Trainer>>, ApiError> {
    let trainers = service::get_trainers(&state.pool).await?;
    Ok(Json(trainers))
}

/// POST /trainers - register a trainer from a form submission
async fn register_trainer(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TrainerForm>,
) -> Result<(StatusCode, Json<Trainer>), ApiError> {
    let trainer = service::register_trainer(&state.pool, form).await?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

/// GET /trainers/{id}
async fn get_trainer(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Trainer>, ApiError> {
    let trainer = service::get_trainer(&state.pool, id).await?;
    Ok(Json(trainer))
}

/// Trainer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trainers", get(list_trainers).post(register_trainer))
        .route("/trainers/{id}", get(get_trainer))
}
