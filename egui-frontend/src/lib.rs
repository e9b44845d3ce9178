//! AquaKids Therapy: role-based dashboards for an aquatic-therapy clinic.
//!
//! - `backend` - UI-independent domain state (record stores, forms, dashboards)
//! - `ui` - egui rendering and session state
//! - `config` - optional `config.yaml`

pub mod backend;
pub mod config;
pub mod ui;

pub use ui::AquaKidsApp;
