use serde::{Deserialize, Serialize};
use shared::{RecordId, UserRole};

use super::{ensure_present, required, ValidationError};
use crate::backend::domain::form_editor::Draft;
use crate::backend::domain::record_store::Record;

/// A clinic account listed on the admin dashboard. Names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub role: UserRole,
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub role: UserRole,
}

impl Draft for UserDraft {
    type Record = User;

    fn from_record(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            role: user.role,
        }
    }

    fn build(&self) -> Result<User, ValidationError> {
        Ok(User {
            id: 0,
            name: required("name", &self.name)?,
            role: self.role,
        })
    }
}
