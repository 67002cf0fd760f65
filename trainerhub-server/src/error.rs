//! Error types for trainerhub-server

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn trainer_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "trainer",
            id: id.to_string(),
        }
    }

    pub fn booking_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "booking",
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_resource_and_id() {
        assert_eq!(
            Error::trainer_not_found(999).to_string(),
            "trainer '999' not found"
        );
    }

    #[test]
    fn validation_message_passes_through() {
        let err = Error::from(ValidationError::Empty { field: "sport" });
        assert_eq!(err.to_string(), "validation failed: sport cannot be empty");
    }
}
