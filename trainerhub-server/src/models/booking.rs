//! Booking request input

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::validation::{required_text, ValidationError};

/// Formats accepted for `preferred_datetime`, tried in order.
///
/// The minute-precision variants are what an HTML `datetime-local` input
/// submits.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a preferred session date-time.
///
/// # Example
/// ```
/// use trainerhub_server::models::parse_preferred_datetime;
///
/// assert!(parse_preferred_datetime("2024-06-01T10:00:00").is_ok());
/// assert!(parse_preferred_datetime("2024-06-01T10:00").is_ok());
/// assert!(parse_preferred_datetime("next tuesday").is_err());
/// ```
pub fn parse_preferred_datetime(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    const FIELD: &str = "preferred_datetime";

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: FIELD });
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidDateTime {
            field: FIELD,
            value: raw.to_owned(),
        })
}

/// Parse a trainer reference submitted as text.
pub fn parse_trainer_id(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "trainer_id" });
    }
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "trainer_id",
        value: raw.to_owned(),
    })
}

/// Booking form as submitted against a trainer already named in the URL
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub parent_name: String,
    pub parent_contact: String,
    pub preferred_datetime: String,
    pub notes: Option<String>,
}

/// Booking form carrying its own trainer reference
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateBookingForm {
    pub trainer_id: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub preferred_datetime: String,
    pub notes: Option<String>,
}

/// Booking fields that passed validation, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub(crate) parent_name: String,
    pub(crate) parent_contact: String,
    pub(crate) preferred_datetime: NaiveDateTime,
    pub(crate) notes: String,
}

impl NewBooking {
    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    pub fn parent_contact(&self) -> &str {
        &self.parent_contact
    }

    pub fn preferred_datetime(&self) -> NaiveDateTime {
        self.preferred_datetime
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl TryFrom<BookingForm> for NewBooking {
    type Error = ValidationError;

    fn try_from(form: BookingForm) -> Result<Self, Self::Error> {
        let parent_name = required_text("parent_name", &form.parent_name);
        let parent_contact = required_text("parent_contact", &form.parent_contact);
        let preferred_datetime = parse_preferred_datetime(&form.preferred_datetime);

        let errors = [
            parent_name.as_ref().err(),
            parent_contact.as_ref().err(),
            preferred_datetime.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
        ValidationError::collect(errors)?;

        Ok(Self {
            parent_name: parent_name?,
            parent_contact: parent_contact?,
            preferred_datetime: preferred_datetime?,
            notes: form.notes.map(|n| n.trim().to_owned()).unwrap_or_default(),
        })
    }
}

impl CreateBookingForm {
    /// Validate the trainer reference along with the booking fields,
    /// reporting all offenders at once.
    pub fn validate(self) -> Result<(i64, NewBooking), ValidationError> {
        let trainer_id = parse_trainer_id(&self.trainer_id);
        let booking = NewBooking::try_from(BookingForm {
            parent_name: self.parent_name,
            parent_contact: self.parent_contact,
            preferred_datetime: self.preferred_datetime,
            notes: self.notes,
        });

        match (trainer_id, booking) {
            (Ok(id), Ok(booking)) => Ok((id, booking)),
            (Err(id_err), Ok(_)) => Err(id_err),
            (Ok(_), Err(booking_err)) => Err(booking_err),
            (Err(id_err), Err(ValidationError::Fields(rest))) => {
                let mut errors = vec![id_err];
                errors.extend(rest);
                Err(ValidationError::Fields(errors))
            }
            (Err(id_err), Err(booking_err)) => {
                Err(ValidationError::Fields(vec![id_err, booking_err]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> BookingForm {
        BookingForm {
            parent_name: "Jane Doe".into(),
            parent_contact: "555-1234".into(),
            preferred_datetime: "2024-06-01T10:00:00".into(),
            notes: None,
        }
    }

    fn june_first_ten() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn valid_form_defaults_notes_to_empty() {
        let booking = NewBooking::try_from(form()).unwrap();
        assert_eq!(booking.parent_name(), "Jane Doe");
        assert_eq!(booking.preferred_datetime(), june_first_ten());
        assert_eq!(booking.notes(), "");
    }

    #[test]
    fn keeps_notes() {
        let booking = NewBooking::try_from(BookingForm {
            notes: Some(" bring cleats ".into()),
            ..form()
        })
        .unwrap();
        assert_eq!(booking.notes(), "bring cleats");
    }

    #[test]
    fn accepts_datetime_local_and_space_separated() {
        for raw in [
            "2024-06-01T10:00",
            "2024-06-01 10:00",
            "2024-06-01 10:00:00",
            " 2024-06-01T10:00:00 ",
        ] {
            assert_eq!(parse_preferred_datetime(raw).unwrap(), june_first_ten(), "{raw}");
        }
    }

    #[test]
    fn rejects_malformed_datetime() {
        for raw in ["2024-06-01", "2024-13-01T10:00", "tomorrow at ten"] {
            let err = parse_preferred_datetime(raw).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidDateTime { .. }), "{raw}");
        }
    }

    #[test]
    fn missing_required_fields_are_named() {
        let err = NewBooking::try_from(BookingForm::default()).unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["parent_name", "parent_contact", "preferred_datetime"]
        );
    }

    #[test]
    fn trainer_id_parsing() {
        assert_eq!(parse_trainer_id(" 7 ").unwrap(), 7);
        assert_eq!(
            parse_trainer_id("").unwrap_err(),
            ValidationError::Empty { field: "trainer_id" }
        );
        assert!(matches!(
            parse_trainer_id("seven").unwrap_err(),
            ValidationError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn create_form_validates_trainer_reference() {
        let (trainer_id, booking) = CreateBookingForm {
            trainer_id: "1".into(),
            parent_name: "Jane Doe".into(),
            parent_contact: "555-1234".into(),
            preferred_datetime: "2024-06-01T10:00".into(),
            notes: None,
        }
        .validate()
        .unwrap();
        assert_eq!(trainer_id, 1);
        assert_eq!(booking.parent_name(), "Jane Doe");
    }

    #[test]
    fn create_form_reports_trainer_id_first() {
        let err = CreateBookingForm {
            trainer_id: "abc".into(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["trainer_id", "parent_name", "parent_contact", "preferred_datetime"]
        );
    }
}
