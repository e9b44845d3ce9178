//! # App State Module
//!
//! The central application struct. Rendering methods live next to the
//! components they draw (`impl AquaKidsApp` blocks in `ui::components`).
//!
//! ## Key Types:
//! - `AquaKidsApp` - Session (role + mounted dashboards) and presentation state
//!
//! ## Key Functions:
//! - `new()` - Build the app from a loaded configuration
//! - `select_role()` - Switch role from the header or a call-to-action

use chrono::Local;
use log::info;
use shared::Role;

use crate::config::AppConfig;
use crate::ui::state::{SessionState, UIState};

/// Main application struct for the egui clinic app
pub struct AquaKidsApp {
    pub session: SessionState,
    pub ui_state: UIState,
}

impl AquaKidsApp {
    pub fn new(config: &AppConfig) -> Self {
        info!(
            "🚀 Initializing AquaKids Therapy (role: {}, store lifetime: {:?}, demo data: {})",
            config.initial_role, config.store_lifetime, config.seed_demo_data
        );

        Self {
            session: SessionState::new(config),
            ui_state: UIState::new(Local::now().date_naive()),
        }
    }

    /// Switch the active role and drop any banner from the previous view
    pub fn select_role(&mut self, role: Role) {
        if self.session.switch_role(role) {
            self.ui_state.clear_messages();
        }
        self.ui_state.role_dropdown.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreLifetime;

    #[test]
    fn test_new_app_starts_on_configured_role() {
        let config = AppConfig {
            initial_role: Role::Therapist,
            ..AppConfig::default()
        };
        let app = AquaKidsApp::new(&config);
        assert_eq!(app.session.role(), Role::Therapist);
        assert!(app.session.is_mounted(Role::Therapist));
        assert!(!app.ui_state.role_dropdown.is_open);
    }

    #[test]
    fn test_select_role_clears_banner_and_closes_dropdown() {
        let mut app = AquaKidsApp::new(&AppConfig::default());
        app.ui_state.set_success("Booked");
        app.ui_state.role_dropdown.is_open = true;

        app.select_role(Role::Parent);

        assert_eq!(app.session.role(), Role::Parent);
        assert!(app.ui_state.success_message.is_none());
        assert!(!app.ui_state.role_dropdown.is_open);
    }

    #[test]
    fn test_reselecting_current_role_keeps_banner() {
        let mut app = AquaKidsApp::new(&AppConfig::default());
        app.ui_state.set_success("Hello");
        app.select_role(Role::Guest);
        assert_eq!(app.ui_state.success_message.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_call_to_action_keeps_parent_state_in_session_lifetime() {
        let config = AppConfig {
            store_lifetime: StoreLifetime::Session,
            ..AppConfig::default()
        };
        let mut app = AquaKidsApp::new(&config);
        app.select_role(Role::Parent);
        assert!(app.session.parent_mut().register(1));

        app.select_role(Role::Guest);
        app.select_role(Role::Parent);

        assert!(app.session.parent().unwrap().is_registered(1));
    }
}
