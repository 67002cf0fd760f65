//! Validation error types

use std::fmt;

/// Validation error for submitted form fields
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty (after trimming) when it shouldn't be
    Empty { field: &'static str },

    /// Field should hold a number but doesn't parse as one
    InvalidNumber { field: &'static str, value: String },

    /// Number is below zero
    Negative { field: &'static str },

    /// Field should hold a date-time but doesn't match any accepted format
    InvalidDateTime { field: &'static str, value: String },

    /// Row rejected by a table CHECK constraint
    Constraint { table: &'static str, message: String },

    /// Several fields failed at once
    Fields(Vec<ValidationError>),
}

impl ValidationError {
    /// Names of the offending fields, in submission order.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::Empty { field }
            | Self::InvalidNumber { field, .. }
            | Self::Negative { field }
            | Self::InvalidDateTime { field, .. } => vec![*field],
            Self::Constraint { .. } => Vec::new(),
            Self::Fields(errors) => errors.iter().flat_map(|e| e.fields()).collect(),
        }
    }

    /// Fold per-field failures into a single result.
    ///
    /// No errors is `Ok`, one error is returned as-is, more are wrapped in
    /// `Fields`.
    pub fn collect(mut errors: Vec<ValidationError>) -> Result<(), ValidationError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Fields(errors)),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidNumber { field, value } => {
                write!(f, "{} must be a number, got '{}'", field, value)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::InvalidDateTime { field, value } => write!(
                f,
                "{} must be a date-time like 2024-06-01T10:00, got '{}'",
                field, value
            ),
            Self::Constraint { table, message } => {
                write!(f, "{} row rejected: {}", table, message)
            }
            Self::Fields(errors) => {
                let parts: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join("; "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim a text field and reject it when nothing is left.
pub fn required_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}
