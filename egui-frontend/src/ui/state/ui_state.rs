//! # UI State Module
//!
//! Transient presentation state that is not part of any dashboard: the role
//! dropdown, the feedback banner and the date picker scratch dates.

use chrono::NaiveDate;

use crate::ui::components::dropdown_menu::DropdownMenu;

#[derive(Debug)]
pub struct UIState {
    /// Header role selector
    pub role_dropdown: DropdownMenu,

    /// Confirmation shown under the header after a successful action
    pub success_message: Option<String>,

    /// Date shown by the parent booking date picker
    pub booking_picker_date: NaiveDate,

    /// Date shown by the therapist prep-time date picker
    pub prep_picker_date: NaiveDate,

    /// Set by the landing page "Learn More" button, consumed once scrolled
    pub scroll_to_services: bool,
}

impl UIState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            role_dropdown: DropdownMenu::default(),
            success_message: None,
            booking_picker_date: today,
            prep_picker_date: today,
            scroll_to_services: false,
        }
    }

    pub fn clear_messages(&mut self) {
        self.success_message = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
    }
}
