//! # Styling Module
//!
//! Global egui styling plus the drawing helpers every dashboard shares.
//!
//! ## Key Functions:
//! - `setup_clinic_style()` - Configure global egui styling
//! - `draw_page_background()` - White-to-cyan vertical wash behind the content
//! - `section_card()` - Titled white card used for every dashboard section
//! - `list_row()` - Bordered row for list entries
//! - `status_badge()` - Colored pill for a pool's status

use eframe::egui;
use shared::PoolStatus;

use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Setup global styling for the entire application
pub fn setup_clinic_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        // Panels stay transparent so the page wash shows through
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        style.visuals.extreme_bg_color = egui::Color32::WHITE;
        style.visuals.selection.bg_fill = colors::ACCENT_SOFT;
        style.visuals.selection.stroke = egui::Stroke::new(1.0, colors::ACCENT);
        style.visuals.hyperlink_color = colors::ACCENT;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Vertical gradient from white to a pale cyan
pub fn draw_page_background(painter: &egui::Painter, rect: egui::Rect) {
    let top = CURRENT_THEME.layout.gradient_top;
    let bottom = CURRENT_THEME.layout.gradient_bottom;

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);

    painter.add(egui::Shape::mesh(mesh));
}

/// White bordered card with a shadow
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0))
        .shadow(egui::Shadow {
            offset: egui::vec2(0.0, 1.0),
            blur: 3.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}

/// Section card with a heading, optional description and body
pub fn section_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    description: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(egui::Label::new(egui::RichText::new(title)
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_HEADING))
                .selectable(false));
            if let Some(description) = description {
                ui.label(egui::RichText::new(description)
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY));
            }
            ui.add_space(12.0);
            add_contents(ui)
        })
        .inner
}

/// Page title and subtitle at the top of a dashboard
pub fn dashboard_heading(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) {
    ui.add(egui::Label::new(egui::RichText::new(title)
        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
        .strong()
        .color(colors::TEXT_HEADING))
        .selectable(false));
    if let Some(subtitle) = subtitle {
        ui.label(egui::RichText::new(subtitle).size(13.0).color(colors::TEXT_SECONDARY));
    }
    ui.add_space(12.0);
}

/// Bordered row used by every list on the dashboards
pub fn list_row(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(add_contents);
        });
}

pub fn status_badge(ui: &mut egui::Ui, status: PoolStatus) {
    let (text, fill) = match status {
        PoolStatus::Available => (
            CURRENT_THEME.status.available_text,
            CURRENT_THEME.status.available_background,
        ),
        PoolStatus::UnderMaintenance => (
            CURRENT_THEME.status.maintenance_text,
            CURRENT_THEME.status.maintenance_background,
        ),
    };

    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.label()).size(12.0).strong().color(text));
        });
}
