//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract a numeric record id from the path.
///
/// A non-numeric id is a validation error naming `id`, reported as JSON like
/// every other error instead of axum's plain-text rejection.
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = raw.parse().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidNumber {
                field: "id",
                value: raw.clone(),
            })
        })?;

        Ok(Self(id))
    }
}
