//! # Admin Dashboard State
//!
//! Tabbed management of pools, programs and users. Each managed list is a
//! [`Manager`]: a sequential-id store plus the add/update form bound to it.
//! Switching tabs touches neither the stores nor half-filled forms.

use log::info;
use shared::RecordId;

use crate::backend::domain::form_editor::{Draft, FormEditor, Submission};
use crate::backend::domain::models::{PoolDraft, ProgramDraft, UserDraft, ValidationError};
use crate::backend::domain::record_store::{IdStrategy, Record, RecordStore};
use crate::backend::domain::seed;

/// Tabs of the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Pools,
    Programs,
    Users,
    Reports,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Pools, AdminTab::Programs, AdminTab::Users, AdminTab::Reports];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Pools => "Pool Management",
            AdminTab::Programs => "Program/Class Management",
            AdminTab::Users => "User Management",
            AdminTab::Reports => "Reports",
        }
    }
}

/// A store and the form that edits it
#[derive(Debug, Clone)]
pub struct Manager<D: Draft> {
    store: RecordStore<D::Record>,
    pub form: FormEditor<D>,
}

impl<D: Draft> Manager<D> {
    pub fn new(seed: Vec<D::Record>) -> Self {
        Self {
            store: RecordStore::with_records(IdStrategy::Sequential, seed),
            form: FormEditor::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<D::Record> {
        &self.store
    }

    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        self.form.submit(&mut self.store)
    }

    /// Load the record with `id` into the form. Returns `false` if missing.
    pub fn edit(&mut self, id: RecordId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.form.begin_edit(record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: RecordId) -> Option<D::Record> {
        self.store.remove(id)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
    pub tab: AdminTab,
    pub pools: Manager<PoolDraft>,
    pub programs: Manager<ProgramDraft>,
    pub users: Manager<UserDraft>,
}

impl AdminDashboard {
    pub fn new(seed_demo_data: bool) -> Self {
        let dashboard = if seed_demo_data {
            Self {
                tab: AdminTab::default(),
                pools: Manager::new(seed::admin_pools()),
                programs: Manager::new(seed::admin_programs()),
                users: Manager::new(seed::admin_users()),
            }
        } else {
            Self {
                tab: AdminTab::default(),
                pools: Manager::new(Vec::new()),
                programs: Manager::new(Vec::new()),
                users: Manager::new(Vec::new()),
            }
        };

        info!(
            "Mounting admin dashboard: {} pools, {} programs, {} users",
            dashboard.pools.store().len(),
            dashboard.programs.store().len(),
            dashboard.users.store().len()
        );
        dashboard
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        if self.tab != tab {
            info!("Admin tab: {} -> {}", self.tab.label(), tab.label());
            self.tab = tab;
        }
    }
}

/// Ids of a store in display order, handy for assertions and snapshots
pub fn ids<T: Record>(store: &RecordStore<T>) -> Vec<RecordId> {
    store.list().map(|r| r.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PoolStatus, UserRole};

    #[test]
    fn test_hydro_pool_gets_next_id() {
        let mut admin = AdminDashboard::new(true);
        admin.pools.form.draft = PoolDraft {
            name: "Hydro Pool".to_string(),
            capacity: "8".to_string(),
            status: PoolStatus::Available,
        };

        assert_eq!(admin.pools.submit(), Ok(Submission::Added(4)));

        assert_eq!(admin.pools.store().len(), 4);
        let hydro = admin.pools.store().get(4).unwrap();
        assert_eq!(hydro.name, "Hydro Pool");
        assert_eq!(hydro.capacity, 8);
    }

    #[test]
    fn test_pool_without_capacity_is_ignored() {
        let mut admin = AdminDashboard::new(true);
        admin.pools.form.draft.name = "Hydro Pool".to_string();

        assert_eq!(admin.pools.submit(), Err(ValidationError::MissingField("capacity")));
        assert_eq!(ids(admin.pools.store()), vec![1, 2, 3]);
    }

    #[test]
    fn test_edit_pool_keeps_id_and_length() {
        let mut admin = AdminDashboard::new(true);
        assert!(admin.pools.edit(2));
        assert_eq!(admin.pools.form.draft.name, "Sensory Pool");

        admin.pools.form.draft.status = PoolStatus::Available;
        admin.pools.form.draft.capacity = "7".to_string();
        assert_eq!(admin.pools.submit(), Ok(Submission::Updated(2)));

        assert_eq!(ids(admin.pools.store()), vec![1, 2, 3]);
        let pool = admin.pools.store().get(2).unwrap();
        assert_eq!(pool.capacity, 7);
        assert_eq!(pool.status, PoolStatus::Available);
        assert!(!admin.pools.form.is_editing());
    }

    #[test]
    fn test_edit_missing_record_leaves_form_alone() {
        let mut admin = AdminDashboard::new(true);
        assert!(!admin.programs.edit(42));
        assert!(!admin.programs.form.is_editing());
    }

    #[test]
    fn test_cancel_program_edit() {
        let mut admin = AdminDashboard::new(true);
        admin.programs.edit(1);
        admin.programs.form.draft.title = "Renamed".to_string();
        admin.programs.cancel();

        assert_eq!(admin.programs.store().get(1).unwrap().title, "Adaptive Beginners Group");
        assert_eq!(admin.programs.form.draft, ProgramDraft::default());
    }

    #[test]
    fn test_remove_user() {
        let mut admin = AdminDashboard::new(true);
        let removed = admin.users.remove(2).unwrap();

        assert_eq!(removed.name, "Alex Morgan");
        assert_eq!(ids(admin.users.store()), vec![1, 3]);
        assert!(admin.users.remove(2).is_none());
        assert_eq!(admin.users.store().len(), 2);
    }

    #[test]
    fn test_add_user_allows_duplicate_names() {
        let mut admin = AdminDashboard::new(true);
        admin.users.form.draft = UserDraft {
            name: "Jamie Lee".to_string(),
            role: UserRole::Admin,
        };

        assert_eq!(admin.users.submit(), Ok(Submission::Added(4)));
        assert_eq!(admin.users.store().list().filter(|u| u.name == "Jamie Lee").count(), 2);
        assert_eq!(admin.users.form.draft.role, UserRole::Parent);
    }

    #[test]
    fn test_tab_switch_keeps_stores_and_drafts() {
        let mut admin = AdminDashboard::new(true);
        admin.pools.form.draft.name = "Half typed".to_string();
        let pools_before: Vec<_> = admin.pools.store().list().cloned().collect();

        for tab in AdminTab::ALL {
            admin.select_tab(tab);
        }
        admin.select_tab(AdminTab::Pools);

        let pools_after: Vec<_> = admin.pools.store().list().cloned().collect();
        assert_eq!(pools_before, pools_after);
        assert_eq!(admin.pools.form.draft.name, "Half typed");
    }

    #[test]
    fn test_unseeded_dashboard_starts_empty() {
        let mut admin = AdminDashboard::new(false);
        assert!(admin.pools.store().is_empty());
        assert!(admin.programs.store().is_empty());
        assert!(admin.users.store().is_empty());

        admin.users.form.draft.name = "Taylor Brooks".to_string();
        assert_eq!(admin.users.submit(), Ok(Submission::Added(1)));
    }
}
