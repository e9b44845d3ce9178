//! # Record Store
//!
//! In-memory ordered collection of records keyed by a synthetic id. Every
//! dashboard list (pools, programs, users, bookings, registrations, schedule
//! entries, availability windows) is one of these.
//!
//! ## Key Operations:
//! - `add()` - Validate, assign the next id and append
//! - `update()` - Replace the record with a matching id, keeping the id
//! - `remove()` - Drop the record with a matching id, preserving order
//! - `list()` - Records in insertion (display) order
//! - `insert_with_id()` - Insert under a caller-chosen id, no-op if taken
//!
//! The backing `IndexMap` makes id uniqueness structural: a second record can
//! never be stored under an id that is already present.

use chrono::Utc;
use indexmap::IndexMap;
use log::{debug, info, warn};
use shared::RecordId;

use crate::backend::domain::models::ValidationError;

/// A record that can live in a [`RecordStore`]
pub trait Record: Clone {
    /// Entity name used in log lines
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Overwrite the id; called by the store on insert and update
    fn set_id(&mut self, id: RecordId);

    /// Presence checks on required fields
    fn validate(&self) -> Result<(), ValidationError>;
}

/// How a store allocates ids for new records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `max existing id + 1`, starting at 1
    Sequential,
    /// Current epoch milliseconds, bumped past the largest id on collision
    Timestamp,
}

#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: IndexMap<RecordId, T>,
    strategy: IdStrategy,
}

impl<T: Record> RecordStore<T> {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            records: IndexMap::new(),
            strategy,
        }
    }

    /// Build a store from seed records, keeping their ids. Records whose id
    /// is already taken are skipped.
    pub fn with_records(strategy: IdStrategy, records: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new(strategy);
        for record in records {
            let id = record.id();
            if !store.insert_with_id(id, record) {
                warn!("Skipping duplicate seed {} with id {}", T::KIND, id);
            }
        }
        store
    }

    /// Validate and append a record under a freshly allocated id.
    ///
    /// On validation failure the store is left untouched.
    pub fn add(&mut self, mut record: T) -> Result<RecordId, ValidationError> {
        if let Err(e) = record.validate() {
            warn!("Rejected new {}: {}", T::KIND, e);
            return Err(e);
        }

        let id = self.next_id();
        record.set_id(id);
        self.records.insert(id, record);

        info!("Added {} with id {} ({} total)", T::KIND, id, self.records.len());
        Ok(id)
    }

    /// Replace the record stored under `id`. The replacement keeps `id`
    /// whatever id it carried. Returns `Ok(false)` when nothing matched.
    pub fn update(&mut self, id: RecordId, mut record: T) -> Result<bool, ValidationError> {
        if let Err(e) = record.validate() {
            warn!("Rejected update of {} {}: {}", T::KIND, id, e);
            return Err(e);
        }

        match self.records.get_mut(&id) {
            Some(slot) => {
                record.set_id(id);
                *slot = record;
                info!("Updated {} with id {}", T::KIND, id);
                Ok(true)
            }
            None => {
                debug!("No {} with id {} to update", T::KIND, id);
                Ok(false)
            }
        }
    }

    /// Remove the record stored under `id`, keeping the order of the rest
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let removed = self.records.shift_remove(&id);
        match &removed {
            Some(_) => info!("Removed {} with id {} ({} left)", T::KIND, id, self.records.len()),
            None => debug!("No {} with id {} to remove", T::KIND, id),
        }
        removed
    }

    /// Insert under a caller-chosen id. Returns `false` and leaves the store
    /// unchanged when the id is already present.
    pub fn insert_with_id(&mut self, id: RecordId, mut record: T) -> bool {
        if self.records.contains_key(&id) {
            return false;
        }
        record.set_id(id);
        self.records.insert(id, record);
        true
    }

    /// Records in insertion order
    pub fn list(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.records.values()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    fn max_id(&self) -> RecordId {
        self.records.keys().copied().max().unwrap_or(0)
    }

    fn next_id(&self) -> RecordId {
        let after_max = self.max_id() + 1;
        match self.strategy {
            IdStrategy::Sequential => after_max,
            IdStrategy::Timestamp => {
                let now = Utc::now().timestamp_millis().max(0) as RecordId;
                now.max(after_max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::pool::Pool;
    use shared::PoolStatus;

    fn pool(name: &str, capacity: u32) -> Pool {
        Pool {
            id: 0,
            name: name.to_string(),
            capacity,
            status: PoolStatus::Available,
        }
    }

    fn seeded() -> RecordStore<Pool> {
        RecordStore::with_records(
            IdStrategy::Sequential,
            vec![
                Pool { id: 1, ..pool("Therapy Pool", 6) },
                Pool { id: 2, ..pool("Sensory Pool", 4) },
                Pool { id: 3, ..pool("Warm Water Therapy Pool", 5) },
            ],
        )
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let mut store = seeded();
        let id = store.add(pool("Hydro Pool", 8)).unwrap();

        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);
        let added = store.list().last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.name, "Hydro Pool");
    }

    #[test]
    fn test_add_to_empty_store_starts_at_one() {
        let mut store = RecordStore::new(IdStrategy::Sequential);
        assert_eq!(store.add(pool("First", 1)).unwrap(), 1);
    }

    #[test]
    fn test_add_after_removing_max_reuses_nothing_in_use() {
        let mut store = seeded();
        store.remove(3);
        let id = store.add(pool("Hydro Pool", 8)).unwrap();
        assert_eq!(id, 3);
        let ids: Vec<_> = store.list().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_rejects_blank_required_field() {
        let mut store = seeded();
        let result = store.add(pool("   ", 8));

        assert!(matches!(result, Err(ValidationError::MissingField("name"))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let mut store = seeded();
        let replacement = Pool {
            id: 99,
            status: PoolStatus::UnderMaintenance,
            ..pool("Renamed Pool", 10)
        };

        assert!(store.update(2, replacement).unwrap());

        assert_eq!(store.len(), 3);
        let updated = store.get(2).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Renamed Pool");
        assert_eq!(updated.capacity, 10);
        assert!(!store.contains(99));
        let order: Vec<_> = store.list().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = seeded();
        let before: Vec<_> = store.list().cloned().collect();

        assert!(!store.update(42, pool("Ghost", 1)).unwrap());

        let after: Vec<_> = store.list().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_with_blank_field_is_rejected() {
        let mut store = seeded();
        assert!(store.update(1, pool("", 3)).is_err());
        assert_eq!(store.get(1).unwrap().name, "Therapy Pool");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = seeded();
        let removed = store.remove(2).unwrap();

        assert_eq!(removed.name, "Sensory Pool");
        assert_eq!(store.len(), 2);
        assert!(!store.contains(2));
        let order: Vec<_> = store.list().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = seeded();
        assert!(store.remove(7).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_insert_with_id_refuses_duplicates() {
        let mut store = seeded();
        assert!(!store.insert_with_id(1, pool("Duplicate", 2)));
        assert_eq!(store.get(1).unwrap().name, "Therapy Pool");
        assert!(store.insert_with_id(10, pool("Ten", 2)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_seed_duplicates_are_skipped() {
        let store = RecordStore::with_records(
            IdStrategy::Sequential,
            vec![Pool { id: 1, ..pool("A", 1) }, Pool { id: 1, ..pool("B", 1) }],
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().name, "A");
    }

    #[test]
    fn test_timestamp_ids_stay_unique_within_a_millisecond() {
        let mut store = RecordStore::new(IdStrategy::Timestamp);
        let ids: Vec<_> = (0..50)
            .map(|i| store.add(pool(&format!("Pool {}", i), 1)).unwrap())
            .collect();

        assert_eq!(store.len(), 50);
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert!(ids[0] > 1_600_000_000_000);
    }

    #[test]
    fn test_timestamp_ids_skip_past_seeded_ids() {
        let mut store = RecordStore::with_records(
            IdStrategy::Timestamp,
            vec![Pool { id: u64::MAX - 10, ..pool("Far future", 1) }],
        );
        let id = store.add(pool("Next", 1)).unwrap();
        assert_eq!(id, u64::MAX - 9);
    }
}
