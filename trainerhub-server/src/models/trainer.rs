//! Trainer registration input

use serde::{Deserialize, Serialize};

use super::validation::{required_text, ValidationError};

/// Validated price per session: finite and non-negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a price from a number.
    ///
    /// # Example
    /// ```
    /// use trainerhub_server::models::Price;
    ///
    /// assert!(Price::new(40.0).is_ok());
    /// assert!(Price::new(-1.0).is_err());
    /// assert!(Price::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidNumber {
                field: "price",
                value: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::Negative { field: "price" });
        }
        // -0.0 passes the check above; store it as plain zero
        Ok(Self(value + 0.0))
    }

    /// Parse a price from submitted text, e.g. `"40.00"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "price" });
        }
        let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
            field: "price",
            value: raw.to_owned(),
        })?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Trainer registration form as submitted.
///
/// Every field defaults to empty so a missing field is reported by
/// validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrainerForm {
    pub sport: String,
    pub credentials: String,
    pub biography: String,
    pub contact: String,
    pub price: String,
}

/// Trainer fields that passed validation, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrainer {
    pub(crate) sport: String,
    pub(crate) credentials: String,
    pub(crate) biography: String,
    pub(crate) contact: String,
    pub(crate) price: Price,
}

impl NewTrainer {
    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn credentials(&self) -> &str {
        &self.credentials
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl TryFrom<TrainerForm> for NewTrainer {
    type Error = ValidationError;

    /// Validate every field, reporting all offenders at once.
    fn try_from(form: TrainerForm) -> Result<Self, Self::Error> {
        let sport = required_text("sport", &form.sport);
        let credentials = required_text("credentials", &form.credentials);
        let biography = required_text("biography", &form.biography);
        let contact = required_text("contact", &form.contact);
        let price = Price::parse(&form.price);

        let errors = [
            sport.as_ref().err(),
            credentials.as_ref().err(),
            biography.as_ref().err(),
            contact.as_ref().err(),
            price.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
        ValidationError::collect(errors)?;

        Ok(Self {
            sport: sport?,
            credentials: credentials?,
            biography: biography?,
            contact: contact?,
            price: price?,
        })
    }
}
