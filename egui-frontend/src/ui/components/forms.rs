//! # Form Helpers
//!
//! Shared widgets for the dashboard forms, so every form looks and behaves
//! the same.
//!
//! ## Key Functions:
//! - `render_form_field()` - Labelled single-line text input
//! - `render_choice_field()` - Labelled combo box over a fixed option list
//! - `render_date_field()` - Date picker that writes `YYYY-MM-DD` into a draft
//! - `render_form_error()` - Inline validation message
//! - `render_form_buttons()` - Primary submit plus an optional Cancel

use chrono::NaiveDate;
use eframe::egui;

use crate::backend::domain::models::ValidationError;
use crate::ui::components::theme::colors;

const FIELD_WIDTH: f32 = 220.0;

/// What the user pressed in a form's button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

fn field_label(ui: &mut egui::Ui, label: &str) {
    ui.label(egui::RichText::new(label)
        .size(13.0)
        .strong()
        .color(colors::TEXT_PRIMARY));
}

/// Labelled text input
pub fn render_form_field(ui: &mut egui::Ui, label: &str, value: &mut String, placeholder: &str) -> egui::Response {
    ui.vertical(|ui| {
        field_label(ui, label);
        ui.add(egui::TextEdit::singleline(value)
            .hint_text(placeholder)
            .desired_width(FIELD_WIDTH))
    })
    .inner
}

/// Labelled combo box; `label_of` turns an option into display text
pub fn render_choice_field<T: Clone + PartialEq>(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    label: &str,
    value: &mut T,
    options: &[T],
    label_of: impl Fn(&T) -> String,
) {
    ui.vertical(|ui| {
        field_label(ui, label);
        egui::ComboBox::from_id_source(id)
            .width(FIELD_WIDTH)
            .selected_text(label_of(value))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, option.clone(), label_of(option));
                }
            });
    });
}

/// Pool picker over plain strings
pub fn render_pool_field(ui: &mut egui::Ui, id: &str, value: &mut String, pools: &[&str]) {
    let options: Vec<String> = pools.iter().map(|p| p.to_string()).collect();
    render_choice_field(ui, id, "Pool", value, &options, |p| p.clone());
}

/// Date picker bound to `picked`. The draft's `date` text is replaced with
/// the picked day whenever it changes, and can be cleared again with the ✖
/// button so the form reports the date as missing.
pub fn render_date_field(ui: &mut egui::Ui, id: &str, picked: &mut NaiveDate, date: &mut String) {
    ui.vertical(|ui| {
        field_label(ui, "Date");
        ui.horizontal(|ui| {
            let before = *picked;
            ui.add(egui_extras::DatePickerButton::new(picked).id_source(id));
            if *picked != before {
                *date = picked.format("%Y-%m-%d").to_string();
            }

            if date.is_empty() {
                if ui.small_button("Use").on_hover_text("Use the picked date").clicked() {
                    *date = picked.format("%Y-%m-%d").to_string();
                }
                ui.label(egui::RichText::new("not set").italics().color(colors::TEXT_SECONDARY));
            } else {
                ui.label(egui::RichText::new(date.as_str()).color(colors::TEXT_PRIMARY));
                if ui.small_button("✖").on_hover_text("Clear date").clicked() {
                    date.clear();
                }
            }
        });
    });
}

/// Time input in 24-hour `HH:MM`
pub fn render_time_field(ui: &mut egui::Ui, value: &mut String) -> egui::Response {
    render_form_field(ui, "Time", value, "HH:MM")
}

/// Inline validation message, or nothing
pub fn render_form_error(ui: &mut egui::Ui, error: Option<&ValidationError>) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(format!("❌ {}", error))
            .size(13.0)
            .color(colors::TEXT_ERROR));
    }
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string())
        .strong()
        .color(colors::TEXT_WHITE))
        .fill(colors::ACCENT)
        .rounding(egui::Rounding::same(6.0))
}

pub fn secondary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_PRIMARY))
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .rounding(egui::Rounding::same(6.0))
}

pub fn danger_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_ERROR))
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, colors::TEXT_ERROR))
        .rounding(egui::Rounding::same(6.0))
}

/// Submit button, plus Cancel while `show_cancel` is set
pub fn render_form_buttons(ui: &mut egui::Ui, submit_text: &str, show_cancel: bool) -> FormAction {
    let mut action = FormAction::None;
    ui.horizontal(|ui| {
        if ui.add(primary_button(submit_text)).clicked() {
            action = FormAction::Submit;
        }
        if show_cancel && ui.add(secondary_button("Cancel")).clicked() {
            action = FormAction::Cancel;
        }
    });
    action
}
