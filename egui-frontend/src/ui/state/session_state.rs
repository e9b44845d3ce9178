//! # Session State
//!
//! The active role and the dashboards mounted for it. The role is plain
//! session context handed to the content router, never a global.
//!
//! ## Store lifetime
//! - `StoreLifetime::Session` - a dashboard is mounted the first time its role
//!   is picked and kept until the app closes, so switching roles never loses
//!   bookings or edits.
//! - `StoreLifetime::View` - switching away from a role drops its dashboard;
//!   coming back mounts a fresh, re-seeded one.

use log::info;
use shared::Role;

use crate::backend::domain::{AdminDashboard, ParentDashboard, TherapistDashboard};
use crate::config::{AppConfig, StoreLifetime};

/// Which screen a role renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Landing,
    Parent,
    Therapist,
    Admin,
}

/// Content selection for the main area
pub fn view_for(role: Role) -> DashboardView {
    match role {
        Role::Guest => DashboardView::Landing,
        Role::Parent => DashboardView::Parent,
        Role::Therapist => DashboardView::Therapist,
        Role::Admin => DashboardView::Admin,
    }
}

#[derive(Debug)]
pub struct SessionState {
    role: Role,
    lifetime: StoreLifetime,
    seed_demo_data: bool,
    parent: Option<ParentDashboard>,
    therapist: Option<TherapistDashboard>,
    admin: Option<AdminDashboard>,
}

impl SessionState {
    pub fn new(config: &AppConfig) -> Self {
        let mut session = Self {
            role: config.initial_role,
            lifetime: config.store_lifetime,
            seed_demo_data: config.seed_demo_data,
            parent: None,
            therapist: None,
            admin: None,
        };
        session.mount(session.role);
        session
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn lifetime(&self) -> StoreLifetime {
        self.lifetime
    }

    /// Switch the active role. Returns `false` if it was already active.
    pub fn switch_role(&mut self, role: Role) -> bool {
        if role == self.role {
            return false;
        }

        info!("👤 Role switched: {} -> {}", self.role, role);
        if self.lifetime == StoreLifetime::View {
            self.unmount(self.role);
        }
        self.role = role;
        self.mount(role);
        true
    }

    pub fn is_mounted(&self, role: Role) -> bool {
        match role {
            Role::Guest => true,
            Role::Parent => self.parent.is_some(),
            Role::Therapist => self.therapist.is_some(),
            Role::Admin => self.admin.is_some(),
        }
    }

    pub fn parent(&self) -> Option<&ParentDashboard> {
        self.parent.as_ref()
    }

    pub fn therapist(&self) -> Option<&TherapistDashboard> {
        self.therapist.as_ref()
    }

    pub fn admin(&self) -> Option<&AdminDashboard> {
        self.admin.as_ref()
    }

    pub fn parent_mut(&mut self) -> &mut ParentDashboard {
        let seed = self.seed_demo_data;
        self.parent.get_or_insert_with(|| ParentDashboard::new(seed))
    }

    pub fn therapist_mut(&mut self) -> &mut TherapistDashboard {
        let seed = self.seed_demo_data;
        self.therapist.get_or_insert_with(|| TherapistDashboard::new(seed))
    }

    pub fn admin_mut(&mut self) -> &mut AdminDashboard {
        let seed = self.seed_demo_data;
        self.admin.get_or_insert_with(|| AdminDashboard::new(seed))
    }

    fn mount(&mut self, role: Role) {
        match role {
            Role::Guest => {}
            Role::Parent => {
                self.parent_mut();
            }
            Role::Therapist => {
                self.therapist_mut();
            }
            Role::Admin => {
                self.admin_mut();
            }
        }
    }

    fn unmount(&mut self, role: Role) {
        let dropped = match role {
            Role::Guest => false,
            Role::Parent => self.parent.take().is_some(),
            Role::Therapist => self.therapist.take().is_some(),
            Role::Admin => self.admin.take().is_some(),
        };
        if dropped {
            info!("Discarded {} dashboard state", role);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::admin_dashboard::ids;

    fn config(lifetime: StoreLifetime) -> AppConfig {
        AppConfig {
            store_lifetime: lifetime,
            ..AppConfig::default()
        }
    }

    fn book_session(session: &mut SessionState) {
        let parent = session.parent_mut();
        parent.booking_form.draft.date = "2024-06-01".to_string();
        parent.booking_form.draft.time = "14:00".to_string();
        parent.submit_booking().unwrap();
        parent.register(1);
    }

    #[test]
    fn test_view_for_each_role() {
        assert_eq!(view_for(Role::Guest), DashboardView::Landing);
        assert_eq!(view_for(Role::Parent), DashboardView::Parent);
        assert_eq!(view_for(Role::Therapist), DashboardView::Therapist);
        assert_eq!(view_for(Role::Admin), DashboardView::Admin);
    }

    #[test]
    fn test_starts_on_configured_role() {
        let session = SessionState::new(&AppConfig::default());
        assert_eq!(session.role(), Role::Guest);
        assert!(session.parent().is_none());

        let admin_first = SessionState::new(&AppConfig {
            initial_role: Role::Admin,
            ..AppConfig::default()
        });
        assert!(admin_first.is_mounted(Role::Admin));
    }

    #[test]
    fn test_switching_to_same_role_is_noop() {
        let mut session = SessionState::new(&AppConfig::default());
        assert!(!session.switch_role(Role::Guest));
        assert!(session.switch_role(Role::Parent));
        assert!(!session.switch_role(Role::Parent));
    }

    #[test]
    fn test_guest_parent_guest_keeps_stores() {
        let mut session = SessionState::new(&config(StoreLifetime::Session));
        session.switch_role(Role::Admin);
        let pools_before = ids(session.admin_mut().pools.store());
        session.switch_role(Role::Parent);
        book_session(&mut session);

        session.switch_role(Role::Guest);
        session.switch_role(Role::Parent);
        session.switch_role(Role::Guest);

        let parent = session.parent().unwrap();
        assert_eq!(parent.bookings().len(), 1);
        assert_eq!(parent.registrations().len(), 1);
        assert_eq!(ids(session.admin().unwrap().pools.store()), pools_before);
    }

    #[test]
    fn test_view_lifetime_discards_on_switch() {
        let mut session = SessionState::new(&config(StoreLifetime::View));
        session.switch_role(Role::Parent);
        book_session(&mut session);
        assert_eq!(session.parent().unwrap().bookings().len(), 1);

        session.switch_role(Role::Guest);
        assert!(!session.is_mounted(Role::Parent));

        session.switch_role(Role::Parent);
        let parent = session.parent().unwrap();
        assert!(parent.bookings().is_empty());
        assert!(parent.registrations().is_empty());
    }

    #[test]
    fn test_view_lifetime_reseeds_admin() {
        let mut session = SessionState::new(&config(StoreLifetime::View));
        session.switch_role(Role::Admin);
        session.admin_mut().pools.remove(1);
        session.switch_role(Role::Therapist);
        session.switch_role(Role::Admin);
        assert_eq!(ids(session.admin().unwrap().pools.store()), vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_flag_reaches_dashboards() {
        let mut session = SessionState::new(&AppConfig {
            seed_demo_data: false,
            ..AppConfig::default()
        });
        assert!(session.therapist_mut().schedule().is_empty());
        assert!(session.admin_mut().users.store().is_empty());
    }
}
