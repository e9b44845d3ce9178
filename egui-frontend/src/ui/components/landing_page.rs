//! # Landing Page
//!
//! What a guest sees: hero with the consultation call-to-action, headline
//! statistics and the three service cards.

use eframe::egui;
use shared::Role;

use crate::ui::app_state::AquaKidsApp;
use crate::ui::components::forms::{primary_button, secondary_button};
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::colors;

const HEADLINE_STATS: [(&str, &str); 3] = [
    ("10+", "Certified therapists"),
    ("500+", "Happy families"),
    ("3", "Specialty pools"),
];

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "❤",
        "Individual Aquatic Therapy",
        "One-on-one sessions focused on motor skills, coordination, and sensory regulation.",
    ),
    (
        "👥",
        "Adaptive Swim Classes",
        "Group classes that build confidence and water safety in a supportive environment.",
    ),
    (
        "🛡",
        "Certified Therapists",
        "Experienced pediatric professionals trained in aquatic therapy and adaptive instruction.",
    ),
];

impl AquaKidsApp {
    pub fn render_landing_page(&mut self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        self.render_hero(ui);
        ui.add_space(48.0);
        self.render_services(ui);
    }

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::Label::new(egui::RichText::new("Compassionate aquatic therapy for every child")
            .font(egui::FontId::new(36.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_HEADING)));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(
            "We combine warm-water therapy, certified professionals, and playful learning to help \
             children build strength, confidence, and joy in the water.",
        )
        .size(17.0)
        .color(colors::TEXT_SECONDARY));

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            if ui.add(primary_button("Book a Consultation ➡").min_size(egui::vec2(0.0, 40.0))).clicked() {
                log::info!("📅 Consultation requested from landing page");
                self.select_role(Role::Parent);
            }
            if ui.add(secondary_button("Learn More").min_size(egui::vec2(0.0, 40.0))).clicked() {
                self.ui_state.scroll_to_services = true;
            }
        });

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            for (value, caption) in HEADLINE_STATS {
                ui.allocate_ui_with_layout(
                    egui::vec2(120.0, 56.0),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        ui.label(egui::RichText::new(value)
                            .size(24.0)
                            .strong()
                            .color(colors::TEXT_HEADING));
                        ui.label(egui::RichText::new(caption).size(12.0).color(colors::TEXT_SECONDARY));
                    },
                );
            }
        });
    }

    fn render_services(&mut self, ui: &mut egui::Ui) {
        let heading = ui.add(egui::Label::new(egui::RichText::new("Our Services")
            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_HEADING))
            .selectable(false));
        if self.ui_state.scroll_to_services {
            heading.scroll_to_me(Some(egui::Align::TOP));
            self.ui_state.scroll_to_services = false;
        }

        ui.label(egui::RichText::new("Tailored programs designed for children of all abilities.")
            .color(colors::TEXT_SECONDARY));
        ui.add_space(16.0);

        ui.columns(SERVICES.len(), |columns| {
            for (column, (icon, title, description)) in columns.iter_mut().zip(SERVICES) {
                card_frame().show(column, |ui| {
                    ui.set_width(ui.available_width());
                    egui::Frame::none()
                        .fill(colors::ACCENT_SOFT)
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::same(8.0))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(icon).size(18.0).color(colors::ACCENT_HOVER));
                        });
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(title).strong().color(colors::TEXT_HEADING));
                    ui.label(egui::RichText::new(description).size(13.0).color(colors::TEXT_SECONDARY));
                });
            }
        });
    }
}
