//! # User Records
//!
//! Synthetic user entries shown in the master table. Every field is derived
//! from the record's 1-based position, so the same count always yields the
//! same directory.
//!
//! ## Example
//!
//! ```rust
//! use directory_core::records::{generate_users, Role, Status};
//!
//! let users = generate_users(5);
//! let fifth = users.get(4).unwrap();
//! assert_eq!(fifth.id, "U-005");
//! assert_eq!(fifth.status, Status::Inactive);
//! assert_eq!(fifth.role, Role::Viewer);
//! assert_eq!(fifth.department, "IT");
//! ```

use serde::{Deserialize, Serialize};

/// Number of records generated when no count is given
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Departments assigned by `index % 5`
pub const DEPARTMENTS: [&str; 5] = ["IT", "HR", "Sales", "Finance", "Ops"];

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    /// Every 5th user is inactive
    pub fn for_index(n: usize) -> Self {
        if n % 5 == 0 {
            Status::Inactive
        } else {
            Status::Active
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Permission role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Role cycle, indexed by `index % 3`
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    pub fn for_index(n: usize) -> Self {
        Role::ALL[n % Role::ALL.len()]
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One synthetic directory entry. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Zero-padded identifier, e.g. "U-007"
    pub id: String,
    pub status: Status,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserRecord {
    /// Build the record at 1-based position `n`.
    pub fn synthetic(n: usize) -> Self {
        UserRecord {
            id: format!("U-{:03}", n),
            status: Status::for_index(n),
            role: Role::for_index(n),
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
            email: format!("user{}@example.com", n),
            department: DEPARTMENTS[n % DEPARTMENTS.len()].to_string(),
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Ordered, read-only collection of user records.
///
/// Insertion order is generation order. There are no mutating accessors: a
/// record set lives unchanged for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<UserRecord>,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at 0-based row `index`, if any
    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.records.get(index)
    }

    /// Row index of the record with this id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.records.iter()
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        generate_users(DEFAULT_RECORD_COUNT)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Generate `count` synthetic users.
///
/// Deterministic: ids run `U-001..`, every 5th user is inactive, roles and
/// departments cycle by index. Counts above 999 keep every digit of the index
/// in the id (`U-1000`).
pub fn generate_users(count: usize) -> RecordSet {
    let records: Vec<UserRecord> = (1..=count).map(UserRecord::synthetic).collect();
    tracing::debug!(count = records.len(), "generated user records");
    RecordSet { records }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_record() {
        let users = generate_users(1);
        let user = users.get(0).unwrap();
        assert_eq!(user.id, "U-001");
        assert_eq!(user.status, Status::Active);
        assert_eq!(user.role, Role::Editor);
        assert_eq!(user.first_name, "First1");
        assert_eq!(user.last_name, "Last1");
        assert_eq!(user.email, "user1@example.com");
        assert_eq!(user.department, "HR");
        assert_eq!(user.full_name(), "First1 Last1");
    }

    #[test]
    fn test_cycles() {
        let users = generate_users(6);
        let roles: Vec<Role> = users.iter().map(|u| u.role).collect();
        assert_eq!(
            roles,
            vec![Role::Editor, Role::Viewer, Role::Admin, Role::Editor, Role::Viewer, Role::Admin]
        );
        let depts: Vec<&str> = users.iter().map(|u| u.department.as_str()).collect();
        assert_eq!(depts, vec!["HR", "Sales", "Finance", "Ops", "IT", "HR"]);
    }

    #[test]
    fn test_default_count() {
        let users = RecordSet::default();
        assert_eq!(users.len(), DEFAULT_RECORD_COUNT);
        assert_eq!(users.get(99).unwrap().id, "U-100");
        assert!(users.get(100).is_none());
    }

    #[test]
    fn test_empty_set() {
        let users = generate_users(0);
        assert!(users.is_empty());
        assert_eq!(users.iter().count(), 0);
    }

    #[test]
    fn test_wide_ids_keep_all_digits() {
        let users = generate_users(1000);
        assert_eq!(users.get(998).unwrap().id, "U-999");
        assert_eq!(users.get(999).unwrap().id, "U-1000");
    }

    #[test]
    fn test_position() {
        let users = generate_users(10);
        assert_eq!(users.position("U-007"), Some(6));
        assert_eq!(users.position("U-011"), None);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_users(25), generate_users(25));
    }

    #[test]
    fn test_serialization() {
        let user = UserRecord::synthetic(5);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"status\":\"Inactive\""));
        let roundtrip: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(user, roundtrip);
    }

    proptest! {
        #[test]
        fn prop_count_and_unique_ids(count in 0usize..=999) {
            let users = generate_users(count);
            prop_assert_eq!(users.len(), count);

            let ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
            prop_assert_eq!(ids.len(), count);

            for (i, user) in users.iter().enumerate() {
                prop_assert_eq!(&user.id, &format!("U-{:03}", i + 1));
                prop_assert_eq!(user.id.len(), 5);
            }
        }

        #[test]
        fn prop_inactive_every_fifth(count in 1usize..=300) {
            for (i, user) in generate_users(count).iter().enumerate() {
                let n = i + 1;
                prop_assert_eq!(user.status == Status::Inactive, n % 5 == 0);
            }
        }
    }
}
