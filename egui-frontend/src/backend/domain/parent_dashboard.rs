//! # Parent Dashboard State
//!
//! Private-session bookings and group-class registrations for one parent.
//!
//! ## Key Operations:
//! - `submit_booking()` - Turn the booking form into a booking
//! - `register()` - Enroll in a catalog program; repeat registrations are no-ops
//! - `child_schedule()` - Bookings followed by registrations, for display

use log::{debug, info};
use shared::RecordId;

use crate::backend::domain::form_editor::{FormEditor, Submission};
use crate::backend::domain::models::{Booking, BookingDraft, ProgramOffering, Registration, ValidationError};
use crate::backend::domain::record_store::{IdStrategy, RecordStore};
use crate::backend::domain::seed;

/// One line of "My Child's Schedule"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildScheduleItem<'a> {
    Session(&'a Booking),
    Class(&'a Registration),
}

#[derive(Debug, Clone)]
pub struct ParentDashboard {
    catalog: Vec<ProgramOffering>,
    bookings: RecordStore<Booking>,
    registrations: RecordStore<Registration>,
    pub booking_form: FormEditor<BookingDraft>,
}

impl ParentDashboard {
    /// Mount with the class catalog. Bookings and registrations always start
    /// empty; `with_catalog` decides whether parents have classes to pick.
    pub fn new(with_catalog: bool) -> Self {
        let catalog = if with_catalog { seed::program_catalog() } else { Vec::new() };
        info!("Mounting parent dashboard with {} catalog programs", catalog.len());

        Self {
            catalog,
            bookings: RecordStore::new(IdStrategy::Timestamp),
            // Registrations are keyed by program id, never allocated
            registrations: RecordStore::new(IdStrategy::Sequential),
            booking_form: FormEditor::new(),
        }
    }

    pub fn catalog(&self) -> &[ProgramOffering] {
        &self.catalog
    }

    pub fn bookings(&self) -> &RecordStore<Booking> {
        &self.bookings
    }

    pub fn registrations(&self) -> &RecordStore<Registration> {
        &self.registrations
    }

    pub fn submit_booking(&mut self) -> Result<Submission, ValidationError> {
        self.booking_form.submit(&mut self.bookings)
    }

    /// Register for the catalog program with `program_id`. Returns `true`
    /// only when a new registration was created.
    pub fn register(&mut self, program_id: RecordId) -> bool {
        match self.catalog.iter().find(|p| p.id == program_id) {
            Some(offering) => {
                let registration = Registration::from(offering);
                Self::register_in(&mut self.registrations, registration)
            }
            None => {
                debug!("No catalog program with id {}", program_id);
                false
            }
        }
    }

    /// Register for an arbitrary offering, deduplicated by its id
    pub fn register_offering(&mut self, offering: &ProgramOffering) -> bool {
        Self::register_in(&mut self.registrations, Registration::from(offering))
    }

    pub fn is_registered(&self, program_id: RecordId) -> bool {
        self.registrations.contains(program_id)
    }

    pub fn child_schedule(&self) -> Vec<ChildScheduleItem<'_>> {
        self.bookings
            .list()
            .map(ChildScheduleItem::Session)
            .chain(self.registrations.list().map(ChildScheduleItem::Class))
            .collect()
    }

    fn register_in(registrations: &mut RecordStore<Registration>, registration: Registration) -> bool {
        let id = registration.id;
        let title = registration.title.clone();
        if registrations.insert_with_id(id, registration) {
            info!("Registered for program {} ({})", id, title);
            true
        } else {
            debug!("Already registered for program {}", id);
            false
        }
    }
}
