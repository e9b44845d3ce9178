use serde::{Deserialize, Serialize};
use shared::RecordId;

use super::{ensure_present, required, ValidationError};
use crate::backend::domain::form_editor::Draft;
use crate::backend::domain::record_store::Record;

/// A group class managed from the admin dashboard.
///
/// `therapist` is a free-text name and is not checked against the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: RecordId,
    pub title: String,
    pub therapist: String,
    pub schedule: String,
}

impl Record for Program {
    const KIND: &'static str = "program";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("title", &self.title)?;
        ensure_present("therapist", &self.therapist)?;
        ensure_present("schedule", &self.schedule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramDraft {
    pub title: String,
    pub therapist: String,
    pub schedule: String,
}

impl Draft for ProgramDraft {
    type Record = Program;

    fn from_record(program: &Program) -> Self {
        Self {
            title: program.title.clone(),
            therapist: program.therapist.clone(),
            schedule: program.schedule.clone(),
        }
    }

    fn build(&self) -> Result<Program, ValidationError> {
        Ok(Program {
            id: 0,
            title: required("title", &self.title)?,
            therapist: required("therapist", &self.therapist)?,
            schedule: required("schedule", &self.schedule)?,
        })
    }
}

/// Entry of the read-only class catalog parents register from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramOffering {
    pub id: RecordId,
    pub title: String,
    pub spots: u32,
    pub schedule: String,
}
