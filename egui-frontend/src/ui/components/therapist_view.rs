//! # Therapist Dashboard View
//!
//! "My Schedule", "Book a Pool for Prep" and "Manage Availability", backed
//! by `TherapistDashboard`.

use eframe::egui;
use shared::Weekday;

use crate::backend::domain::seed::BOOKABLE_POOLS;
use crate::backend::domain::{Submission, TherapistDashboard};
use crate::ui::app_state::AquaKidsApp;
use crate::ui::components::forms::{
    render_choice_field, render_date_field, render_form_buttons, render_form_error, render_form_field,
    render_pool_field, render_time_field, FormAction,
};
use crate::ui::components::styling::{dashboard_heading, list_row, section_card};
use crate::ui::components::theme::colors;
use crate::ui::state::UIState;

impl AquaKidsApp {
    pub fn render_therapist_dashboard(&mut self, ui: &mut egui::Ui) {
        dashboard_heading(
            ui,
            "Therapist Dashboard",
            Some("View assignments, book prep time, and manage availability."),
        );

        let AquaKidsApp { session, ui_state } = self;
        let dashboard = session.therapist_mut();

        ui.columns(3, |columns| {
            render_schedule(&mut columns[0], dashboard);
            render_prep_form(&mut columns[1], dashboard, ui_state);
            render_availability(&mut columns[2], dashboard, ui_state);
        });
    }
}

fn render_schedule(ui: &mut egui::Ui, dashboard: &TherapistDashboard) {
    section_card(ui, "My Schedule", None, |ui| {
        if dashboard.schedule().is_empty() {
            ui.label(egui::RichText::new("Nothing scheduled.").size(13.0).color(colors::TEXT_SECONDARY));
        }
        for entry in dashboard.schedule().list() {
            list_row(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&entry.title).strong().color(colors::TEXT_HEADING));
                    ui.label(egui::RichText::new(&entry.when).size(13.0).color(colors::TEXT_SECONDARY));
                });
            });
        }
    });
}

fn render_prep_form(ui: &mut egui::Ui, dashboard: &mut TherapistDashboard, ui_state: &mut UIState) {
    section_card(
        ui,
        "Book a Pool for Prep",
        Some("Reserve time for private training or preparation."),
        |ui| {
            let draft = &mut dashboard.prep_form.draft;
            render_pool_field(ui, "therapist_prep_pool", &mut draft.pool, &BOOKABLE_POOLS);
            render_date_field(ui, "therapist_prep_date", &mut ui_state.prep_picker_date, &mut draft.date);
            render_time_field(ui, &mut draft.time);

            render_form_error(ui, dashboard.prep_form.error());
            ui.add_space(4.0);

            if render_form_buttons(ui, "Reserve", false) == FormAction::Submit {
                if let Ok(Submission::Added(_)) = dashboard.submit_prep_time() {
                    ui_state.set_success("Pool reserved for prep time");
                }
            }
        },
    );
}

fn render_availability(ui: &mut egui::Ui, dashboard: &mut TherapistDashboard, ui_state: &mut UIState) {
    section_card(
        ui,
        "Manage Availability",
        Some("Set office hours or block off time."),
        |ui| {
            let draft = &mut dashboard.availability_form.draft;
            render_choice_field(ui, "therapist_availability_day", "Day", &mut draft.day, &Weekday::ALL, |d| {
                d.label().to_string()
            });
            render_form_field(ui, "Time Window", &mut draft.time, "e.g., 1:00 PM - 4:00 PM");

            render_form_error(ui, dashboard.availability_form.error());
            ui.add_space(4.0);

            if render_form_buttons(ui, "Add", false) == FormAction::Submit {
                if let Ok(Submission::Added(_)) = dashboard.submit_availability() {
                    ui_state.set_success("Availability added");
                }
            }

            ui.add_space(8.0);
            for window in dashboard.availability().list() {
                list_row(ui, |ui| {
                    ui.label(egui::RichText::new(format!("{} — {}", window.day, window.time))
                        .size(13.0)
                        .color(colors::TEXT_PRIMARY));
                });
            }
        },
    );
}
