//! # Form Editor
//!
//! A typed draft bound to a [`RecordStore`]. With no editing id a submit
//! appends a new record; with one it overwrites the record carrying that id.
//! Either way a successful submit resets the draft to its empty shape.
//!
//! A submit that fails validation changes nothing: the store keeps its
//! records and the draft keeps what the user typed. The refusal is kept in
//! `error()` so the form can show it inline.

use log::{info, warn};
use shared::RecordId;

use crate::backend::domain::models::ValidationError;
use crate::backend::domain::record_store::{Record, RecordStore};

/// Editable form state for one record type
pub trait Draft: Default + Clone {
    type Record: Record;

    /// Load a stored record into the form for editing
    fn from_record(record: &Self::Record) -> Self;

    /// Validate the form and produce a record (id left for the store to set)
    fn build(&self) -> Result<Self::Record, ValidationError>;
}

/// What a successful submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Added(RecordId),
    Updated(RecordId),
    /// The record being edited was removed before the submit landed
    Stale(RecordId),
}

#[derive(Debug, Clone, Default)]
pub struct FormEditor<D: Draft> {
    pub draft: D,
    editing: Option<RecordId>,
    error: Option<ValidationError>,
}

impl<D: Draft> FormEditor<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            editing: None,
            error: None,
        }
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Last validation refusal, cleared by the next successful submit or reset
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Copy `record` into the draft and target it on the next submit
    pub fn begin_edit(&mut self, record: &D::Record) {
        info!("Editing {} {}", <D::Record as Record>::KIND, record.id());
        self.draft = D::from_record(record);
        self.editing = Some(record.id());
        self.error = None;
    }

    /// Drop the draft and the editing id without touching any store
    pub fn cancel(&mut self) {
        self.draft = D::default();
        self.editing = None;
        self.error = None;
    }

    pub fn submit(&mut self, store: &mut RecordStore<D::Record>) -> Result<Submission, ValidationError> {
        let record = match self.draft.build() {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring {} submission: {}", <D::Record as Record>::KIND, e);
                self.error = Some(e.clone());
                return Err(e);
            }
        };

        let outcome = match self.editing {
            Some(id) => {
                if store.update(id, record).map_err(|e| self.remember(e))? {
                    Submission::Updated(id)
                } else {
                    Submission::Stale(id)
                }
            }
            None => Submission::Added(store.add(record).map_err(|e| self.remember(e))?),
        };

        self.cancel();
        Ok(outcome)
    }

    fn remember(&mut self, e: ValidationError) -> ValidationError {
        self.error = Some(e.clone());
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{Program, ProgramDraft};
    use crate::backend::domain::record_store::IdStrategy;

    fn store() -> RecordStore<Program> {
        RecordStore::with_records(
            IdStrategy::Sequential,
            vec![Program {
                id: 1,
                title: "Adaptive Beginners Group".to_string(),
                therapist: "Alex Morgan".to_string(),
                schedule: "Mon/Wed 3:00 PM".to_string(),
            }],
        )
    }

    fn fill(editor: &mut FormEditor<ProgramDraft>, title: &str) {
        editor.draft.title = title.to_string();
        editor.draft.therapist = "Jamie Lee".to_string();
        editor.draft.schedule = "Fri 1:00 PM".to_string();
    }

    #[test]
    fn test_submit_without_editing_id_adds_and_resets() {
        let mut store = store();
        let mut editor = FormEditor::<ProgramDraft>::new();
        fill(&mut editor, "Splash Club");

        assert_eq!(editor.submit(&mut store), Ok(Submission::Added(2)));
        assert_eq!(store.len(), 2);
        assert_eq!(editor.draft, ProgramDraft::default());
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_submit_while_editing_updates_in_place() {
        let mut store = store();
        let mut editor = FormEditor::<ProgramDraft>::new();
        let original = store.get(1).cloned().unwrap();

        editor.begin_edit(&original);
        assert_eq!(editor.editing_id(), Some(1));
        assert_eq!(editor.draft.title, "Adaptive Beginners Group");

        editor.draft.schedule = "Tue 5:00 PM".to_string();
        assert_eq!(editor.submit(&mut store), Ok(Submission::Updated(1)));

        assert_eq!(store.len(), 1);
        let updated = store.get(1).unwrap();
        assert_eq!(updated.schedule, "Tue 5:00 PM");
        assert_eq!(updated.title, original.title);
        assert_eq!(editor.editing_id(), None);
    }

    #[test]
    fn test_invalid_submit_keeps_store_and_draft() {
        let mut store = store();
        let mut editor = FormEditor::<ProgramDraft>::new();
        editor.draft.title = "Half filled".to_string();

        let result = editor.submit(&mut store);

        assert_eq!(result, Err(ValidationError::MissingField("therapist")));
        assert_eq!(store.len(), 1);
        assert_eq!(editor.draft.title, "Half filled");
        assert_eq!(editor.error(), Some(&ValidationError::MissingField("therapist")));
    }

    #[test]
    fn test_cancel_clears_without_mutating() {
        let mut store = store();
        let mut editor = FormEditor::<ProgramDraft>::new();
        let original = store.get(1).cloned().unwrap();
        editor.begin_edit(&original);
        editor.draft.title = "Changed my mind".to_string();

        editor.cancel();

        assert_eq!(editor.draft, ProgramDraft::default());
        assert_eq!(editor.editing_id(), None);
        assert_eq!(store.get(1), Some(&original));
        // Nothing left to submit
        assert!(editor.submit(&mut store).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_editing_a_removed_record_is_stale() {
        let mut store = store();
        let mut editor = FormEditor::<ProgramDraft>::new();
        let original = store.get(1).cloned().unwrap();
        editor.begin_edit(&original);
        store.remove(1);

        assert_eq!(editor.submit(&mut store), Ok(Submission::Stale(1)));
        assert!(store.is_empty());
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_successful_submit_clears_previous_error() {
        let mut store = store();
        let mut editor = FormEditor::<ProgramDraft>::new();
        assert!(editor.submit(&mut store).is_err());
        assert!(editor.error().is_some());

        fill(&mut editor, "Splash Club");
        editor.submit(&mut store).unwrap();
        assert!(editor.error().is_none());
    }
}
