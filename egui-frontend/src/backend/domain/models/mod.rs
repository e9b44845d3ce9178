//! Domain models for the clinic dashboards.
//!
//! Each entity file holds the stored record and, where a form edits it, the
//! matching draft type.

use thiserror::Error;

pub mod booking;
pub mod pool;
pub mod program;
pub mod schedule;
pub mod user;

pub use booking::{Booking, BookingDraft, Registration};
pub use pool::{Pool, PoolDraft};
pub use program::{Program, ProgramDraft, ProgramOffering};
pub use schedule::{AvailabilityDraft, AvailabilityWindow, PrepTimeDraft, ScheduleEntry};
pub use user::{User, UserDraft};

/// Why a submission was refused. Refusals never mutate a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("capacity must be a positive whole number, got '{0}'")]
    InvalidCapacity(String),
}

/// Trimmed copy of a required text field, or `MissingField` when blank
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Presence check for fields already stored on a record
pub(crate) fn ensure_present(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value).map(|_| ())
}
