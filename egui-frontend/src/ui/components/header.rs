//! # Header Module
//!
//! This module handles rendering the application header: clinic branding on
//! the left, the role selector on the right and the feedback banner below.
//!
//! ## Key Functions:
//! - `render_header()` - Branding plus role selector
//! - `render_role_dropdown()` - Role menu under the selector button
//! - `render_messages()` - Success banner display
//!
//! ## Features:
//! - Translucent white background over the page wash
//! - Current role highlighted in the menu
//! - Escape or a click outside closes the menu

use eframe::egui;
use shared::Role;

use crate::ui::app_state::AquaKidsApp;
use crate::ui::components::dropdown_menu::{DropdownButtonConfig, DropdownMenuConfig, DropdownMenuItem};
use crate::ui::components::theme::colors;

impl AquaKidsApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200))
            .inner_margin(egui::Margin::symmetric(24.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                // Logo tile
                let (logo_rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
                ui.painter().rect_filled(logo_rect, egui::Rounding::same(8.0), colors::ACCENT);
                ui.painter().text(
                    logo_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "🌊",
                    egui::FontId::new(18.0, egui::FontFamily::Proportional),
                    colors::TEXT_WHITE,
                );

                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    ui.add(egui::Label::new(egui::RichText::new("AquaKids Therapy")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_HEADING))
                        .selectable(false));
                    ui.add(egui::Label::new(egui::RichText::new("Aquatic therapy & adaptive swim")
                        .size(12.0)
                        .color(colors::TEXT_SECONDARY))
                        .selectable(false));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button_config = DropdownButtonConfig {
                        text: format!("👤 {}", self.session.role().label()),
                        font_size: 14.0,
                        text_color: colors::TEXT_PRIMARY,
                        hover_bg_color: egui::Color32::from_rgba_unmultiplied(8, 145, 178, 12),
                        hover_border_color: colors::ACCENT,
                    };

                    let (button_response, should_show_dropdown) =
                        self.ui_state.role_dropdown.render_button(ui, &button_config);

                    if should_show_dropdown {
                        self.render_role_dropdown(ui, button_response.rect);
                    }
                });
            });
        });
    }

    /// Render the role menu under the selector button
    pub fn render_role_dropdown(&mut self, ui: &mut egui::Ui, button_rect: egui::Rect) {
        let current = self.session.role();
        let menu_items: Vec<DropdownMenuItem> = Role::ALL
            .iter()
            .map(|role| DropdownMenuItem {
                label: role.label().to_string(),
                icon: None,
                is_current: *role == current,
                is_enabled: true,
            })
            .collect();

        let menu_config = DropdownMenuConfig {
            min_width: 176.0,
            ..DropdownMenuConfig::default()
        };

        // Anchor the menu's right edge to the button's right edge
        let anchor = egui::Rect::from_min_size(
            egui::pos2(button_rect.right() - menu_config.min_width, button_rect.top()),
            egui::vec2(menu_config.min_width, button_rect.height()),
        );

        let mut selected_index: Option<usize> = None;
        self.ui_state.role_dropdown.render_menu(ui, anchor, &menu_items, &menu_config, |index| {
            selected_index = Some(index);
        });

        // Role switch outside the closure to avoid borrowing conflicts
        if let Some(role) = selected_index.and_then(|index| Role::ALL.get(index).copied()) {
            self.select_role(role);
        }
    }

    /// Render success message under the header
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.ui_state.success_message.clone() else {
            return;
        };

        egui::Frame::none()
            .fill(egui::Color32::from_rgb(220, 252, 231))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("✅ {}", message)).color(colors::TEXT_SUCCESS));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            self.ui_state.clear_messages();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }
}
