use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Teacher,
    Student,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Lifecycle state shared by classes and quizzes. Archived content stays
/// visible to its owner; deleted content sits in the recycle bin until
/// restored or permanently removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    #[default]
    Active,
    Archived,
    Deleted,
}

impl ContentState {
    pub fn is_active(self) -> bool {
        self == ContentState::Active
    }

    pub fn is_deleted(self) -> bool {
        self == ContentState::Deleted
    }
}
