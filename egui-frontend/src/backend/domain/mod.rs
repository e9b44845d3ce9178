//! UI-independent state for the clinic dashboards: records, the generic
//! ordered store, typed form drafts and one state struct per role view.

pub mod admin_dashboard;
pub mod form_editor;
pub mod models;
pub mod parent_dashboard;
pub mod record_store;
pub mod seed;
pub mod therapist_dashboard;

pub use admin_dashboard::{AdminDashboard, AdminTab, Manager};
pub use form_editor::{Draft, FormEditor, Submission};
pub use parent_dashboard::{ChildScheduleItem, ParentDashboard};
pub use record_store::{IdStrategy, Record, RecordStore};
pub use therapist_dashboard::TherapistDashboard;
