//! # UI Components Module
//!
//! This module organizes all UI components for the clinic application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `theme` - Cyan clinic palette
//! - `styling` - Global egui style, page background, cards and badges
//! - `dropdown_menu` - Button plus floating menu (role selector)
//! - `forms` - Labelled fields, date picker, inline errors and form buttons
//! - `header` - Branding, role selector and feedback banner
//! - `role_content` - Content routing by active role
//! - `landing_page` - Guest landing page
//! - `parent_view` - Parent dashboard
//! - `therapist_view` - Therapist dashboard
//! - `admin_view` - Admin dashboard tabs

pub mod admin_view;
pub mod dropdown_menu;
pub mod forms;
pub mod header;
pub mod landing_page;
pub mod parent_view;
pub mod role_content;
pub mod styling;
pub mod theme;
pub mod therapist_view;

pub use styling::{draw_page_background, setup_clinic_style};
pub use theme::*;
