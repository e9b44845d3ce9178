//! # Parent Dashboard View
//!
//! Renders the three parent sections side by side and forwards form
//! submissions and registrations to `ParentDashboard`.
//!
//! ## Key Functions:
//! - `render_parent_dashboard()` - Page layout
//! - `render_booking_form()` - "Book a Session"
//! - `render_program_catalog()` - "Register for Programs"
//! - `render_child_schedule()` - "My Child's Schedule"

use eframe::egui;

use crate::backend::domain::models::ProgramOffering;
use crate::backend::domain::seed::BOOKABLE_POOLS;
use crate::backend::domain::{ChildScheduleItem, ParentDashboard, Submission};
use crate::ui::app_state::AquaKidsApp;
use crate::ui::components::forms::{
    render_date_field, render_form_buttons, render_form_error, render_form_field, render_pool_field,
    render_time_field, secondary_button, FormAction,
};
use crate::ui::components::styling::{dashboard_heading, list_row, section_card};
use crate::ui::components::theme::colors;
use crate::ui::state::UIState;

impl AquaKidsApp {
    pub fn render_parent_dashboard(&mut self, ui: &mut egui::Ui) {
        dashboard_heading(
            ui,
            "Parent Dashboard",
            Some("Manage private sessions and group class registrations."),
        );

        let AquaKidsApp { session, ui_state } = self;
        let dashboard = session.parent_mut();

        ui.columns(3, |columns| {
            render_booking_form(&mut columns[0], dashboard, ui_state);
            render_program_catalog(&mut columns[1], dashboard, ui_state);
            render_child_schedule(&mut columns[2], dashboard);
        });
    }
}

fn render_booking_form(ui: &mut egui::Ui, dashboard: &mut ParentDashboard, ui_state: &mut UIState) {
    section_card(
        ui,
        "Book a Session",
        Some("Private one-on-one aquatic therapy in a specific pool."),
        |ui| {
            let draft = &mut dashboard.booking_form.draft;
            render_pool_field(ui, "parent_booking_pool", &mut draft.pool, &BOOKABLE_POOLS);
            render_date_field(ui, "parent_booking_date", &mut ui_state.booking_picker_date, &mut draft.date);
            render_time_field(ui, &mut draft.time);
            render_form_field(ui, "Preferred Therapist (optional)", &mut draft.therapist, "e.g., Alex Morgan");

            render_form_error(ui, dashboard.booking_form.error());
            ui.add_space(4.0);

            if render_form_buttons(ui, "➕ Book Session", false) == FormAction::Submit {
                if let Ok(Submission::Added(_)) = dashboard.submit_booking() {
                    ui_state.set_success("Session booked");
                }
            }
        },
    );
}

fn render_program_catalog(ui: &mut egui::Ui, dashboard: &mut ParentDashboard, ui_state: &mut UIState) {
    section_card(
        ui,
        "Register for Programs",
        Some("Browse and register your child for group classes."),
        |ui| {
            if dashboard.catalog().is_empty() {
                ui.label(egui::RichText::new("No programs are open for registration.")
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY));
                return;
            }

            let mut picked: Option<ProgramOffering> = None;
            for offering in dashboard.catalog() {
                list_row(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&offering.title).strong().color(colors::TEXT_HEADING));
                        ui.label(egui::RichText::new(format!("{} • {} spots left", offering.schedule, offering.spots))
                            .size(13.0)
                            .color(colors::TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if dashboard.is_registered(offering.id) { "Registered ✔" } else { "Register" };
                        if ui.add(secondary_button(label)).clicked() {
                            picked = Some(offering.clone());
                        }
                    });
                });
            }

            if let Some(offering) = picked {
                if dashboard.register(offering.id) {
                    ui_state.set_success(format!("Registered for {}", offering.title));
                }
            }
        },
    );
}

fn render_child_schedule(ui: &mut egui::Ui, dashboard: &ParentDashboard) {
    section_card(
        ui,
        "My Child's Schedule",
        Some("All upcoming bookings and registered classes."),
        |ui| {
            let items = dashboard.child_schedule();
            if items.is_empty() {
                ui.label(egui::RichText::new(
                    "No upcoming items yet. Book a session or register for a class to get started.",
                )
                .size(13.0)
                .color(colors::TEXT_SECONDARY));
                return;
            }

            for item in items {
                let (icon, title, detail) = match item {
                    ChildScheduleItem::Session(booking) => (
                        "📅",
                        format!("{} — {}", booking.session_type, booking.pool),
                        format!("{} • Therapist: {}", booking.datetime, booking.therapist),
                    ),
                    ChildScheduleItem::Class(registration) => (
                        "🕒",
                        registration.title.clone(),
                        registration.schedule.clone(),
                    ),
                };
                list_row(ui, |ui| {
                    ui.label(egui::RichText::new(icon).color(colors::ACCENT));
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(title).strong().color(colors::TEXT_HEADING));
                        ui.label(egui::RichText::new(detail).size(13.0).color(colors::TEXT_SECONDARY));
                    });
                });
            }
        },
    );
}
