//! Therapist dashboard state: the personal schedule, prep-time pool
//! reservations (which land on that schedule) and availability windows.
//! Both lists only grow.

use log::info;

use crate::backend::domain::form_editor::{FormEditor, Submission};
use crate::backend::domain::models::{
    AvailabilityDraft, AvailabilityWindow, PrepTimeDraft, ScheduleEntry, ValidationError,
};
use crate::backend::domain::record_store::{IdStrategy, RecordStore};
use crate::backend::domain::seed;

#[derive(Debug, Clone)]
pub struct TherapistDashboard {
    schedule: RecordStore<ScheduleEntry>,
    availability: RecordStore<AvailabilityWindow>,
    pub prep_form: FormEditor<PrepTimeDraft>,
    pub availability_form: FormEditor<AvailabilityDraft>,
}

impl TherapistDashboard {
    pub fn new(seed_demo_data: bool) -> Self {
        let (schedule, availability) = if seed_demo_data {
            (seed::therapist_schedule(), seed::therapist_availability())
        } else {
            (Vec::new(), Vec::new())
        };
        info!(
            "Mounting therapist dashboard with {} schedule entries and {} availability windows",
            schedule.len(),
            availability.len()
        );

        Self {
            schedule: RecordStore::with_records(IdStrategy::Timestamp, schedule),
            availability: RecordStore::with_records(IdStrategy::Timestamp, availability),
            prep_form: FormEditor::new(),
            availability_form: FormEditor::new(),
        }
    }

    pub fn schedule(&self) -> &RecordStore<ScheduleEntry> {
        &self.schedule
    }

    pub fn availability(&self) -> &RecordStore<AvailabilityWindow> {
        &self.availability
    }

    /// Reserve a pool for prep time; the reservation joins the schedule
    pub fn submit_prep_time(&mut self) -> Result<Submission, ValidationError> {
        self.prep_form.submit(&mut self.schedule)
    }

    pub fn submit_availability(&mut self) -> Result<Submission, ValidationError> {
        self.availability_form.submit(&mut self.availability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Weekday;

    #[test]
    fn test_seeded_lists() {
        let dashboard = TherapistDashboard::new(true);
        assert_eq!(dashboard.schedule().len(), 2);
        assert_eq!(dashboard.availability().len(), 1);
        assert_eq!(dashboard.availability().get(1).unwrap().day, Weekday::Tue);

        let empty = TherapistDashboard::new(false);
        assert!(empty.schedule().is_empty());
        assert!(empty.availability().is_empty());
    }

    #[test]
    fn test_prep_time_appends_to_schedule() {
        let mut dashboard = TherapistDashboard::new(true);
        dashboard.prep_form.draft.pool = "Sensory Pool".to_string();
        dashboard.prep_form.draft.date = "2024-06-03".to_string();
        dashboard.prep_form.draft.time = "08:00".to_string();

        let Submission::Added(id) = dashboard.submit_prep_time().unwrap() else {
            panic!("expected a new schedule entry")
        };

        assert_eq!(dashboard.schedule().len(), 3);
        let entry = dashboard.schedule().list().last().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.title, "Prep Time — Sensory Pool");
        assert_eq!(entry.when, "2024-06-03 08:00");
        assert_eq!(dashboard.prep_form.draft, PrepTimeDraft::default());
    }

    #[test]
    fn test_incomplete_prep_time_is_ignored() {
        let mut dashboard = TherapistDashboard::new(true);
        dashboard.prep_form.draft.date = "2024-06-03".to_string();

        assert!(dashboard.submit_prep_time().is_err());
        assert_eq!(dashboard.schedule().len(), 2);
    }

    #[test]
    fn test_availability_form_resets_to_monday() {
        let mut dashboard = TherapistDashboard::new(true);
        dashboard.availability_form.draft.day = Weekday::Thu;
        dashboard.availability_form.draft.time = "1:00 PM - 4:00 PM".to_string();

        dashboard.submit_availability().unwrap();

        assert_eq!(dashboard.availability().len(), 2);
        let added = dashboard.availability().list().last().unwrap();
        assert_eq!(added.day, Weekday::Thu);
        assert!(added.id > 1);
        assert_eq!(dashboard.availability_form.draft.day, Weekday::Mon);
        assert!(dashboard.availability_form.draft.time.is_empty());
    }
}
