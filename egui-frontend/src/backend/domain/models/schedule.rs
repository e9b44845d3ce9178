//! Therapist-side records: the personal schedule and availability windows.
//! Both lists are append-only from the UI.

use serde::{Deserialize, Serialize};
use shared::{RecordId, Weekday};

use super::{ensure_present, required, ValidationError};
use crate::backend::domain::form_editor::Draft;
use crate::backend::domain::record_store::Record;
use crate::backend::domain::seed::BOOKABLE_POOLS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: RecordId,
    pub title: String,
    pub when: String,
}

impl Record for ScheduleEntry {
    const KIND: &'static str = "schedule entry";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("title", &self.title)?;
        ensure_present("when", &self.when)
    }
}

/// "Book a Pool for Prep" form. Submitting adds a prep-time entry to the
/// therapist's own schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepTimeDraft {
    pub pool: String,
    pub date: String,
    pub time: String,
}

impl Default for PrepTimeDraft {
    fn default() -> Self {
        Self {
            pool: BOOKABLE_POOLS[0].to_string(),
            date: String::new(),
            time: String::new(),
        }
    }
}

impl Draft for PrepTimeDraft {
    type Record = ScheduleEntry;

    fn from_record(entry: &ScheduleEntry) -> Self {
        let pool = entry
            .title
            .strip_prefix("Prep Time — ")
            .unwrap_or(entry.title.as_str());
        let (date, time) = entry.when.split_once(' ').unwrap_or((entry.when.as_str(), ""));

        Self {
            pool: pool.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    fn build(&self) -> Result<ScheduleEntry, ValidationError> {
        let pool = required("pool", &self.pool)?;
        let date = required("date", &self.date)?;
        let time = required("time", &self.time)?;

        Ok(ScheduleEntry {
            id: 0,
            title: format!("Prep Time — {}", pool),
            when: format!("{} {}", date, time),
        })
    }
}

/// Office hours offered on one weekday, e.g. `Tue` / `2:00 PM - 5:00 PM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub id: RecordId,
    pub day: Weekday,
    /// Free-text range, not parsed
    pub time: String,
}

impl Record for AvailabilityWindow {
    const KIND: &'static str = "availability window";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("time window", &self.time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityDraft {
    pub day: Weekday,
    pub time: String,
}

impl Draft for AvailabilityDraft {
    type Record = AvailabilityWindow;

    fn from_record(window: &AvailabilityWindow) -> Self {
        Self {
            day: window.day,
            time: window.time.clone(),
        }
    }

    fn build(&self) -> Result<AvailabilityWindow, ValidationError> {
        Ok(AvailabilityWindow {
            id: 0,
            day: self.day,
            time: required("time window", &self.time)?,
        })
    }
}
