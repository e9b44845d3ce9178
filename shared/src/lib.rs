use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthetic record identifier.
///
/// Sequential stores hand out `max + 1`, timestamp stores hand out epoch
/// milliseconds, so a single integer type covers both.
pub type RecordId = u64;

/// Role picked in the header selector. Purely cosmetic: it chooses which
/// dashboard is rendered and gates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Parent,
    Therapist,
    Admin,
}

impl Role {
    /// All roles in selector order
    pub const ALL: [Role; 4] = [Role::Guest, Role::Parent, Role::Therapist, Role::Admin];

    /// Label shown in the role dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Parent => "Parent",
            Role::Therapist => "Therapist",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Operational status of a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PoolStatus {
    #[default]
    Available,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
}

impl PoolStatus {
    pub const ALL: [PoolStatus; 2] = [PoolStatus::Available, PoolStatus::UnderMaintenance];

    pub fn label(&self) -> &'static str {
        match self {
            PoolStatus::Available => "Available",
            PoolStatus::UnderMaintenance => "Under Maintenance",
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Role of a managed user account. Distinct from [`Role`]: there is no guest
/// account, and changing a user's role has no effect on the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    Parent,
    Therapist,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Parent, UserRole::Therapist, UserRole::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Parent => "Parent",
            UserRole::Therapist => "Therapist",
            UserRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Days a therapist can offer availability on (the clinic is closed Sundays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weekday {
    #[default]
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Kind of a parent booking. Only private sessions can be booked directly;
/// group classes go through program registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionType {
    #[default]
    #[serde(rename = "Private Session")]
    PrivateSession,
}

impl SessionType {
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::PrivateSession => "Private Session",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Therapist).unwrap(), "\"therapist\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn test_role_defaults_to_guest() {
        assert_eq!(Role::default(), Role::Guest);
        assert_eq!(Role::ALL[0], Role::Guest);
    }

    #[test]
    fn test_labels_match_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.label());
        }
        assert_eq!(PoolStatus::UnderMaintenance.to_string(), "Under Maintenance");
        assert_eq!(SessionType::PrivateSession.to_string(), "Private Session");
        assert_eq!(Weekday::ALL.iter().map(|d| d.label()).collect::<Vec<_>>().join(","), "Mon,Tue,Wed,Thu,Fri,Sat");
    }

    #[test]
    fn test_pool_status_wire_names() {
        assert_eq!(serde_json::to_string(&PoolStatus::UnderMaintenance).unwrap(), "\"Under Maintenance\"");
        let status: PoolStatus = serde_json::from_str("\"Available\"").unwrap();
        assert_eq!(status, PoolStatus::Available);
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(PoolStatus::default(), PoolStatus::Available);
        assert_eq!(UserRole::default(), UserRole::Parent);
        assert_eq!(Weekday::default(), Weekday::Mon);
    }
}
