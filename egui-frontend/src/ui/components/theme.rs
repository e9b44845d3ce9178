//! # Theme Configuration
//!
//! Centralised colors for the clinic app. Visual styling should go through
//! these constants so the cyan palette stays consistent across dashboards.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::colors;
//!
//! let accent = colors::ACCENT;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Buttons, dropdowns and tabs
    pub interactive: InteractiveColors,
    /// Background and card colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Pool status badges
    pub status: StatusColors,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary action fill (cyan-600)
    pub accent: Color32,
    /// Primary action fill on hover (cyan-700)
    pub accent_hover: Color32,
    /// Light tint behind selected items (cyan-50)
    pub accent_soft: Color32,
    /// Fill of disabled primary buttons
    pub disabled: Color32,
    /// Outline of secondary buttons and inputs
    pub border: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub gradient_top: Color32,
    pub gradient_bottom: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub card_shadow: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Headings and primary labels (gray-900)
    pub heading: Color32,
    /// Body copy (gray-700)
    pub primary: Color32,
    /// Descriptions and meta lines (gray-500)
    pub secondary: Color32,
    /// Inline validation hints
    pub error: Color32,
    /// Confirmation banner
    pub success: Color32,
    pub white: Color32,
}

#[derive(Debug, Clone)]
pub struct StatusColors {
    pub available_text: Color32,
    pub available_background: Color32,
    pub maintenance_text: Color32,
    pub maintenance_background: Color32,
}

/// The active theme: white cards over a white-to-cyan wash
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(8, 145, 178),
        accent_hover: Color32::from_rgb(14, 116, 144),
        accent_soft: Color32::from_rgb(236, 254, 255),
        disabled: Color32::from_rgb(203, 213, 225),
        border: Color32::from_rgb(229, 231, 235),
    },
    layout: LayoutColors {
        gradient_top: Color32::WHITE,
        gradient_bottom: Color32::from_rgb(236, 254, 255),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(229, 231, 235),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 18),
    },
    typography: TypographyColors {
        heading: Color32::from_rgb(17, 24, 39),
        primary: Color32::from_rgb(55, 65, 81),
        secondary: Color32::from_rgb(107, 114, 128),
        error: Color32::from_rgb(220, 38, 38),
        success: Color32::from_rgb(21, 128, 61),
        white: Color32::WHITE,
    },
    status: StatusColors {
        available_text: Color32::from_rgb(21, 128, 61),
        available_background: Color32::from_rgb(240, 253, 244),
        maintenance_text: Color32::from_rgb(180, 83, 9),
        maintenance_background: Color32::from_rgb(255, 251, 235),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACCENT: Color32 = CURRENT_THEME.interactive.accent;
    pub const ACCENT_HOVER: Color32 = CURRENT_THEME.interactive.accent_hover;
    pub const ACCENT_SOFT: Color32 = CURRENT_THEME.interactive.accent_soft;
    pub const DISABLED: Color32 = CURRENT_THEME.interactive.disabled;
    pub const BORDER: Color32 = CURRENT_THEME.interactive.border;

    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_ERROR: Color32 = CURRENT_THEME.typography.error;
    pub const TEXT_SUCCESS: Color32 = CURRENT_THEME.typography.success;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}
