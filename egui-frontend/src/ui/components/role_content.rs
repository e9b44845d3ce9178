//! # Role Content Router
//!
//! Picks the main content from the session's active role.
//!
//! ## Role Flow:
//! - Guest -> landing page
//! - Parent -> parent dashboard
//! - Therapist -> therapist dashboard
//! - Admin -> admin dashboard

use eframe::egui;

use crate::ui::app_state::AquaKidsApp;
use crate::ui::state::{view_for, DashboardView};

impl AquaKidsApp {
    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        let view = view_for(self.session.role());
        log::debug!("📄 Rendering {:?} view", view);

        ui.vertical(|ui| match view {
            DashboardView::Landing => self.render_landing_page(ui),
            DashboardView::Parent => self.render_parent_dashboard(ui),
            DashboardView::Therapist => self.render_therapist_dashboard(ui),
            DashboardView::Admin => self.render_admin_dashboard(ui),
        });
    }
}
