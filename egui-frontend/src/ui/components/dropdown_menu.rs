//! # Dropdown Menu Component
//!
//! A button that toggles a floating menu anchored under it. The header uses
//! it for role selection.
//!
//! ## Key Functions:
//! - `render_button()` - Draw the toggle button and report whether the menu is open
//! - `render_menu()` - Draw the menu under the button and report the picked item
//!
//! The menu closes when an item is picked, when the user clicks outside it
//! or when Escape is pressed.

use eframe::egui;

use crate::ui::components::theme::colors;

/// One entry of a dropdown menu
#[derive(Debug, Clone)]
pub struct DropdownMenuItem {
    pub label: String,
    pub icon: Option<String>,
    pub is_current: bool,
    pub is_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct DropdownButtonConfig {
    pub text: String,
    pub font_size: f32,
    pub text_color: egui::Color32,
    pub hover_bg_color: egui::Color32,
    pub hover_border_color: egui::Color32,
}

#[derive(Debug, Clone)]
pub struct DropdownMenuConfig {
    pub min_width: f32,
    pub item_height: f32,
    pub item_font_size: f32,
}

impl Default for DropdownMenuConfig {
    fn default() -> Self {
        Self {
            min_width: 140.0,
            item_height: 24.0,
            item_font_size: 14.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct DropdownMenu {
    pub is_open: bool,
}

impl DropdownMenu {
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Draw the toggle button. Returns its response and whether the menu
    /// should be drawn this frame.
    pub fn render_button(&mut self, ui: &mut egui::Ui, config: &DropdownButtonConfig) -> (egui::Response, bool) {
        let text = egui::RichText::new(format!("{} ⏷", config.text))
            .font(egui::FontId::new(config.font_size, egui::FontFamily::Proportional))
            .color(config.text_color);

        let button = egui::Button::new(text)
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, colors::BORDER))
            .rounding(egui::Rounding::same(6.0));

        let response = ui.add(button);

        if response.hovered() {
            ui.painter().rect(
                response.rect,
                egui::Rounding::same(6.0),
                config.hover_bg_color,
                egui::Stroke::new(1.5, config.hover_border_color),
            );
        }

        if response.clicked() {
            self.is_open = !self.is_open;
            log::debug!("Dropdown toggled: open={}", self.is_open);
        }

        (response, self.is_open)
    }

    /// Draw the menu under `button_rect`. `on_select` receives the index of a
    /// clicked, enabled item; the same index is returned.
    pub fn render_menu(
        &mut self,
        ui: &mut egui::Ui,
        button_rect: egui::Rect,
        items: &[DropdownMenuItem],
        config: &DropdownMenuConfig,
        mut on_select: impl FnMut(usize),
    ) -> Option<usize> {
        if !self.is_open {
            return None;
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.is_open = false;
            return None;
        }

        let mut clicked = None;
        let menu_pos = egui::pos2(button_rect.left(), button_rect.bottom() + 4.0);

        let area = egui::Area::new(ui.id().with("dropdown_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(menu_pos)
            .show(ui.ctx(), |ui| {
                egui::Frame::none()
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::same(4.0))
                    .show(ui, |ui| {
                        ui.set_min_width(config.min_width.max(button_rect.width()));
                        for (index, item) in items.iter().enumerate() {
                            let label = match &item.icon {
                                Some(icon) => format!("{} {}", icon, item.label),
                                None => item.label.clone(),
                            };
                            let color = if !item.is_enabled {
                                colors::DISABLED
                            } else if item.is_current {
                                colors::ACCENT
                            } else {
                                colors::TEXT_PRIMARY
                            };
                            let mut text = egui::RichText::new(label)
                                .font(egui::FontId::new(config.item_font_size, egui::FontFamily::Proportional))
                                .color(color);
                            if item.is_current {
                                text = text.strong();
                            }

                            let button = egui::Button::new(text)
                                .fill(if item.is_current { colors::ACCENT_SOFT } else { egui::Color32::TRANSPARENT })
                                .stroke(egui::Stroke::NONE)
                                .min_size(egui::vec2(ui.available_width(), config.item_height));

                            let response = ui.add_enabled(item.is_enabled, button);
                            if response.clicked() {
                                clicked = Some(index);
                            }
                        }
                    });
            });

        if let Some(index) = clicked {
            self.is_open = false;
            on_select(index);
            return Some(index);
        }

        // Click anywhere else closes the menu
        let clicked_elsewhere = ui.input(|i| i.pointer.any_click())
            && ui.input(|i| i.pointer.interact_pos())
                .map(|pos| !area.response.rect.contains(pos) && !button_rect.contains(pos))
                .unwrap_or(false);
        if clicked_elsewhere {
            self.is_open = false;
        }

        None
    }
}
