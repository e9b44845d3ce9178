use serde::{Deserialize, Serialize};
use shared::{PoolStatus, RecordId};

use super::{ensure_present, required, ValidationError};
use crate::backend::domain::form_editor::Draft;
use crate::backend::domain::record_store::Record;

/// A therapy pool managed from the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub id: RecordId,
    pub name: String,
    pub capacity: u32,
    pub status: PoolStatus,
}

impl Record for Pool {
    const KIND: &'static str = "pool";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ensure_present("name", &self.name)?;
        if self.capacity == 0 {
            return Err(ValidationError::InvalidCapacity(self.capacity.to_string()));
        }
        Ok(())
    }
}

/// Pool form. Capacity stays text until submit so the field can be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolDraft {
    pub name: String,
    pub capacity: String,
    pub status: PoolStatus,
}

impl Draft for PoolDraft {
    type Record = Pool;

    fn from_record(pool: &Pool) -> Self {
        Self {
            name: pool.name.clone(),
            capacity: pool.capacity.to_string(),
            status: pool.status,
        }
    }

    fn build(&self) -> Result<Pool, ValidationError> {
        let name = required("name", &self.name)?;
        let capacity_text = required("capacity", &self.capacity)?;
        let capacity = match capacity_text.parse::<u32>() {
            Ok(capacity) if capacity > 0 => capacity,
            _ => return Err(ValidationError::InvalidCapacity(capacity_text)),
        };

        Ok(Pool {
            id: 0,
            name,
            capacity,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, capacity: &str) -> PoolDraft {
        PoolDraft {
            name: name.to_string(),
            capacity: capacity.to_string(),
            status: PoolStatus::Available,
        }
    }

    #[test]
    fn test_build_parses_capacity() {
        let pool = draft(" Hydro Pool ", " 8 ").build().unwrap();
        assert_eq!(pool.name, "Hydro Pool");
        assert_eq!(pool.capacity, 8);
        assert_eq!(pool.status, PoolStatus::Available);
    }

    #[test]
    fn test_build_requires_name_and_capacity() {
        assert_eq!(draft("", "8").build(), Err(ValidationError::MissingField("name")));
        assert_eq!(draft("Hydro", "  ").build(), Err(ValidationError::MissingField("capacity")));
    }

    #[test]
    fn test_build_rejects_non_positive_capacity() {
        for bad in ["0", "-3", "six", "2.5"] {
            assert_eq!(
                draft("Hydro", bad).build(),
                Err(ValidationError::InvalidCapacity(bad.to_string())),
                "capacity {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_from_record_round_trips_editable_fields() {
        let pool = Pool {
            id: 2,
            name: "Sensory Pool".to_string(),
            capacity: 4,
            status: PoolStatus::UnderMaintenance,
        };
        let draft = PoolDraft::from_record(&pool);
        assert_eq!(draft.capacity, "4");
        assert_eq!(draft.status, PoolStatus::UnderMaintenance);
        assert_eq!(Pool { id: 2, ..draft.build().unwrap() }, pool);
    }
}
