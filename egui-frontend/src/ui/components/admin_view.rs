//! # Admin Dashboard View
//!
//! Tab strip plus one panel per tab. Pool, program and user panels share the
//! same shape: the current list with per-row actions, then the add/update
//! form bound to that list.
//!
//! ## Key Functions:
//! - `render_admin_dashboard()` - Tab strip and panel routing
//! - `render_record_list()` - Rows with Edit/Delete for any managed store
//! - `render_reports_placeholder()` - Static Reports tab

use eframe::egui;
use log::info;
use shared::{PoolStatus, RecordId, UserRole};

use crate::backend::domain::{AdminDashboard, AdminTab, Draft, Manager, Record, Submission};
use crate::ui::app_state::AquaKidsApp;
use crate::ui::components::forms::{
    danger_button, render_choice_field, render_form_buttons, render_form_error, render_form_field,
    secondary_button, FormAction,
};
use crate::ui::components::styling::{card_frame, list_row, section_card, status_badge};
use crate::ui::components::theme::colors;
use crate::ui::state::UIState;

/// Per-row action picked in a record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Edit(RecordId),
    Delete(RecordId),
}

impl AquaKidsApp {
    pub fn render_admin_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("▦").size(20.0).color(colors::ACCENT));
            ui.add(egui::Label::new(egui::RichText::new("Admin Dashboard")
                .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_HEADING))
                .selectable(false));
        });
        ui.add_space(8.0);

        let AquaKidsApp { session, ui_state } = self;
        let dashboard = session.admin_mut();

        render_tab_strip(ui, dashboard);
        ui.add_space(16.0);

        let tab = dashboard.tab;
        match tab {
            AdminTab::Pools => render_pools_tab(ui, dashboard, ui_state),
            AdminTab::Programs => render_programs_tab(ui, dashboard, ui_state),
            AdminTab::Users => render_users_tab(ui, dashboard, ui_state),
            AdminTab::Reports => render_reports_placeholder(ui),
        }
    }
}

fn render_tab_strip(ui: &mut egui::Ui, dashboard: &mut AdminDashboard) {
    card_frame()
        .inner_margin(egui::Margin::same(4.0))
        .rounding(egui::Rounding::same(8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for tab in AdminTab::ALL {
                    let active = dashboard.tab == tab;
                    let text = egui::RichText::new(tab.label()).color(if active {
                        colors::TEXT_WHITE
                    } else {
                        colors::TEXT_PRIMARY
                    });
                    let button = egui::Button::new(text)
                        .fill(if active { colors::ACCENT } else { egui::Color32::TRANSPARENT })
                        .stroke(egui::Stroke::NONE)
                        .rounding(egui::Rounding::same(6.0));
                    if ui.add(button).clicked() {
                        dashboard.select_tab(tab);
                    }
                }
            });
        });
}

/// Rows for every record in `manager`'s store with Edit and Delete.
/// `describe` fills the left side of a row.
fn render_record_list<D: Draft>(
    ui: &mut egui::Ui,
    manager: &Manager<D>,
    empty_text: &str,
    mut describe: impl FnMut(&mut egui::Ui, &D::Record),
) -> Option<RowAction> {
    let mut action = None;

    if manager.store().is_empty() {
        ui.label(egui::RichText::new(empty_text).size(13.0).color(colors::TEXT_SECONDARY));
    }

    for record in manager.store().list() {
        let id = record.id();
        let is_being_edited = manager.form.editing_id() == Some(id);
        list_row(ui, |ui| {
            ui.vertical(|ui| describe(ui, record));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(danger_button("🗑")).on_hover_text("Delete").clicked() {
                    action = Some(RowAction::Delete(id));
                }
                let edit = if is_being_edited { "✏ Editing" } else { "✏" };
                if ui.add(secondary_button(edit)).on_hover_text("Edit").clicked() {
                    action = Some(RowAction::Edit(id));
                }
            });
        });
    }

    action
}

fn apply_row_action<D: Draft>(manager: &mut Manager<D>, action: Option<RowAction>, ui_state: &mut UIState) {
    match action {
        Some(RowAction::Edit(id)) => {
            manager.edit(id);
        }
        Some(RowAction::Delete(id)) => {
            if manager.remove(id).is_some() {
                info!("🗑 Removed {} {}", <D::Record as Record>::KIND, id);
                ui_state.set_success(format!("Deleted {} #{}", <D::Record as Record>::KIND, id));
            }
        }
        None => {}
    }
}

/// Submit/cancel handling shared by every admin form
fn handle_form_action<D: Draft>(manager: &mut Manager<D>, action: FormAction, ui_state: &mut UIState) {
    match action {
        FormAction::Submit => match manager.submit() {
            Ok(Submission::Added(id)) => {
                ui_state.set_success(format!("Added {} #{}", <D::Record as Record>::KIND, id));
            }
            Ok(Submission::Updated(id)) => {
                ui_state.set_success(format!("Saved changes to {} #{}", <D::Record as Record>::KIND, id));
            }
            Ok(Submission::Stale(_)) | Err(_) => {}
        },
        FormAction::Cancel => manager.cancel(),
        FormAction::None => {}
    }
}

fn name_line(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).strong().color(colors::TEXT_HEADING));
}

fn detail_line(ui: &mut egui::Ui, text: impl Into<String>) {
    ui.label(egui::RichText::new(text.into()).size(13.0).color(colors::TEXT_SECONDARY));
}

fn render_pools_tab(ui: &mut egui::Ui, dashboard: &mut AdminDashboard, ui_state: &mut UIState) {
    let pools = &mut dashboard.pools;
    let mut row_action = None;

    section_card(ui, "Pools", None, |ui| {
        row_action = render_record_list(ui, &*pools, "No pools yet.", |ui, pool| {
            name_line(ui, &pool.name);
            detail_line(ui, format!("Capacity: {}", pool.capacity));
            status_badge(ui, pool.status);
        });
    });
    apply_row_action(pools, row_action, ui_state);

    // Form drawn after the list so an Edit click shows up in the same frame
    let editing = pools.form.is_editing();
    let title = if editing { "Update Pool" } else { "Add Pool" };
    let mut form_action = FormAction::None;
    ui.add_space(12.0);
    section_card(ui, title, None, |ui| {
        let draft = &mut pools.form.draft;
        render_form_field(ui, "Pool Name", &mut draft.name, "e.g., Sensory Pool");
        render_form_field(ui, "Capacity", &mut draft.capacity, "6");
        render_choice_field(ui, "admin_pool_status", "Status", &mut draft.status, &PoolStatus::ALL, |s| {
            s.label().to_string()
        });
        render_form_error(ui, pools.form.error());
        form_action = render_form_buttons(ui, if editing { "Save Changes" } else { "➕ Add Pool" }, editing);
    });
    handle_form_action(pools, form_action, ui_state);
}

fn render_programs_tab(ui: &mut egui::Ui, dashboard: &mut AdminDashboard, ui_state: &mut UIState) {
    let programs = &mut dashboard.programs;
    let mut row_action = None;

    section_card(ui, "Programs & Classes", None, |ui| {
        row_action = render_record_list(ui, &*programs, "No programs yet.", |ui, program| {
            name_line(ui, &program.title);
            detail_line(ui, format!("{} • {}", program.therapist, program.schedule));
        });
    });
    apply_row_action(programs, row_action, ui_state);

    let editing = programs.form.is_editing();
    let title = if editing { "Update Program" } else { "Add Program" };
    let mut form_action = FormAction::None;
    ui.add_space(12.0);
    section_card(ui, title, None, |ui| {
        let draft = &mut programs.form.draft;
        render_form_field(ui, "Title", &mut draft.title, "Adaptive Beginners Group");
        render_form_field(ui, "Therapist", &mut draft.therapist, "e.g., Alex Morgan");
        render_form_field(ui, "Schedule", &mut draft.schedule, "Mon/Wed 3:00 PM");
        render_form_error(ui, programs.form.error());
        form_action = render_form_buttons(ui, if editing { "Save Changes" } else { "➕ Add Program" }, editing);
    });
    handle_form_action(programs, form_action, ui_state);
}

fn render_users_tab(ui: &mut egui::Ui, dashboard: &mut AdminDashboard, ui_state: &mut UIState) {
    let users = &mut dashboard.users;
    let mut row_action = None;

    section_card(ui, "Users", None, |ui| {
        row_action = render_record_list(ui, &*users, "No users yet.", |ui, user| {
            name_line(ui, &user.name);
            detail_line(ui, user.role.label());
        });
    });
    apply_row_action(users, row_action, ui_state);

    let editing = users.form.is_editing();
    let title = if editing { "Update User" } else { "Add User" };
    let mut form_action = FormAction::None;
    ui.add_space(12.0);
    section_card(ui, title, None, |ui| {
        let draft = &mut users.form.draft;
        render_form_field(ui, "Name", &mut draft.name, "e.g., Taylor Brooks");
        render_choice_field(ui, "admin_user_role", "Role", &mut draft.role, &UserRole::ALL, |r| {
            r.label().to_string()
        });
        render_form_error(ui, users.form.error());
        form_action = render_form_buttons(ui, if editing { "Save Changes" } else { "➕ Add User" }, editing);
    });
    handle_form_action(users, form_action, ui_state);
}

fn render_reports_placeholder(ui: &mut egui::Ui) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("📊").size(32.0).color(colors::ACCENT));
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Reports Coming Soon")
                .size(18.0)
                .strong()
                .color(colors::TEXT_HEADING));
            ui.label(egui::RichText::new(
                "This area will include financial and operational insights such as monthly bookings, \
                 pool utilization, and therapist workloads.",
            )
            .color(colors::TEXT_SECONDARY));
        });
    });
}
