//! Demo data the dashboards start with.

use shared::{PoolStatus, UserRole, Weekday};

use crate::backend::domain::models::{
    AvailabilityWindow, Pool, Program, ProgramOffering, ScheduleEntry, User,
};

/// Pools offered in the parent and therapist booking forms, in display order
pub const BOOKABLE_POOLS: [&str; 3] = [
    "Warm Water Therapy Pool",
    "Adaptive Training Pool",
    "Sensory Pool",
];

/// Class catalog shown to parents. Read-only: spots are informational.
pub fn program_catalog() -> Vec<ProgramOffering> {
    vec![
        offering(1, "Adaptive Beginners Group", 3, "Mon/Wed 3:00 PM"),
        offering(2, "Social Therapy Group", 2, "Tue/Thu 4:30 PM"),
        offering(3, "Confidence Builders", 4, "Sat 10:00 AM"),
    ]
}

pub fn therapist_schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry {
            id: 1,
            title: "Private Session — Warm Water Therapy Pool".to_string(),
            when: "Today 3:00 PM".to_string(),
        },
        ScheduleEntry {
            id: 2,
            title: "Adaptive Beginners Group".to_string(),
            when: "Wed 3:00 PM".to_string(),
        },
    ]
}

pub fn therapist_availability() -> Vec<AvailabilityWindow> {
    vec![AvailabilityWindow {
        id: 1,
        day: Weekday::Tue,
        time: "2:00 PM - 5:00 PM".to_string(),
    }]
}

pub fn admin_pools() -> Vec<Pool> {
    vec![
        pool(1, "Therapy Pool", 6, PoolStatus::Available),
        pool(2, "Sensory Pool", 4, PoolStatus::UnderMaintenance),
        pool(3, "Warm Water Therapy Pool", 5, PoolStatus::Available),
    ]
}

pub fn admin_programs() -> Vec<Program> {
    vec![
        Program {
            id: 1,
            title: "Adaptive Beginners Group".to_string(),
            therapist: "Alex Morgan".to_string(),
            schedule: "Mon/Wed 3:00 PM".to_string(),
        },
        Program {
            id: 2,
            title: "Social Therapy Group".to_string(),
            therapist: "Jamie Lee".to_string(),
            schedule: "Tue/Thu 4:30 PM".to_string(),
        },
    ]
}

pub fn admin_users() -> Vec<User> {
    vec![
        user(1, "Jordan Smith", UserRole::Parent),
        user(2, "Alex Morgan", UserRole::Therapist),
        user(3, "Jamie Lee", UserRole::Therapist),
    ]
}

fn offering(id: u64, title: &str, spots: u32, schedule: &str) -> ProgramOffering {
    ProgramOffering {
        id,
        title: title.to_string(),
        spots,
        schedule: schedule.to_string(),
    }
}

fn pool(id: u64, name: &str, capacity: u32, status: PoolStatus) -> Pool {
    Pool {
        id,
        name: name.to_string(),
        capacity,
        status,
    }
}

fn user(id: u64, name: &str, role: UserRole) -> User {
    User {
        id,
        name: name.to_string(),
        role,
    }
}
