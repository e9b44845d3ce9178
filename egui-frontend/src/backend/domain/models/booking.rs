use serde::{Deserialize, Serialize};
use shared::{RecordId, SessionType};

use super::{ensure_present, required, ProgramOffering, ValidationError};
use crate::backend::domain::form_editor::Draft;
use crate::backend::domain::record_store::Record;
use crate::backend::domain::seed::BOOKABLE_POOLS;

/// Therapist shown when the parent leaves the preference blank
pub const UNASSIGNED_THERAPIST: &str = "TBD";

/// A private session booked by a parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    pub pool: String,
    /// `"{date} {time}"` exactly as entered
    pub datetime: String,
    pub therapist: String,
    pub session_type: SessionType,
}

impl Record for Booking {
    const KIND: &'static str = "booking";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("pool", &self.pool)?;
        ensure_present("datetime", &self.datetime)?;
        ensure_present("therapist", &self.therapist)
    }
}

/// "Book a Session" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub pool: String,
    pub date: String,
    pub time: String,
    pub therapist: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            pool: BOOKABLE_POOLS[0].to_string(),
            date: String::new(),
            time: String::new(),
            therapist: String::new(),
        }
    }
}

impl Draft for BookingDraft {
    type Record = Booking;

    fn from_record(booking: &Booking) -> Self {
        let (date, time) = booking
            .datetime
            .split_once(' ')
            .unwrap_or((booking.datetime.as_str(), ""));
        let therapist = if booking.therapist == UNASSIGNED_THERAPIST {
            String::new()
        } else {
            booking.therapist.clone()
        };

        Self {
            pool: booking.pool.clone(),
            date: date.to_string(),
            time: time.to_string(),
            therapist,
        }
    }

    fn build(&self) -> Result<Booking, ValidationError> {
        let pool = required("pool", &self.pool)?;
        let date = required("date", &self.date)?;
        let time = required("time", &self.time)?;
        let therapist = match self.therapist.trim() {
            "" => UNASSIGNED_THERAPIST.to_string(),
            name => name.to_string(),
        };

        Ok(Booking {
            id: 0,
            pool,
            datetime: format!("{} {}", date, time),
            therapist,
            session_type: SessionType::PrivateSession,
        })
    }
}

/// A parent's enrollment in a catalog program. The id is the program id,
/// which is what makes registering twice a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RecordId,
    pub title: String,
    pub schedule: String,
}

impl From<&ProgramOffering> for Registration {
    fn from(offering: &ProgramOffering) -> Self {
        Self {
            id: offering.id,
            title: offering.title.clone(),
            schedule: offering.schedule.clone(),
        }
    }
}

impl Record for Registration {
    const KIND: &'static str = "registration";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("title", &self.title)
    }
}
