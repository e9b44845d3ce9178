//! # App Coordinator Module
//!
//! This module contains the main update loop, tying the header, the role
//! content and the footer together.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//! - `render_footer()` - Copyright line
//!
//! ## Application Flow:
//! 1. Set up clinic styling and paint the page background
//! 2. Handle global input (ESC closes the role menu)
//! 3. Render the header panel
//! 4. Render the footer panel
//! 5. Render the banner and the active role's content in a scroll area

use chrono::{Datelike, Local};
use eframe::egui;

use crate::ui::app_state::AquaKidsApp;
use crate::ui::components::theme::colors;
use crate::ui::*;

const CONTENT_MAX_WIDTH: f32 = 1200.0;

impl eframe::App for AquaKidsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_clinic_style(ctx);
        draw_page_background(&ctx.layer_painter(egui::LayerId::background()), ctx.screen_rect());

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.ui_state.role_dropdown.close();
        }

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none())
            .show_separator_line(true)
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::none().fill(egui::Color32::WHITE).inner_margin(egui::Margin::same(16.0)))
            .show(ctx, |ui| {
                self.render_footer(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        // Center a fixed-width column like a page layout
                        let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(24.0);
                        egui::Frame::none()
                            .inner_margin(egui::Margin { left: side, right: side, top: 24.0, bottom: 32.0 })
                            .show(ui, |ui| {
                                self.render_messages(ui);
                                self.render_main_content(ui);
                            });
                    });
            });
    }
}

impl AquaKidsApp {
    /// Render the footer
    pub fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(format!(
                "© {} AquaKids Therapy. All rights reserved.",
                Local::now().year()
            ))
            .size(13.0)
            .color(colors::TEXT_SECONDARY));
        });
    }
}
