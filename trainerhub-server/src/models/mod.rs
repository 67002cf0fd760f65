//! Domain models with validation at construction
//!
//! Submitted forms are plain string structs. They become `NewTrainer` /
//! `NewBooking` only through `TryFrom`, which reports every bad field as a
//! `ValidationError`.

pub mod validation;
pub mod trainer;
pub mod booking;

pub use validation::ValidationError;
pub use trainer::{NewTrainer, Price, TrainerForm};
pub use booking::{
    parse_preferred_datetime, parse_trainer_id, BookingForm, CreateBookingForm, NewBooking,
};
