use serde::{Deserialize, Serialize};

use crate::core::time::format_timestamp;
use crate::db::models::User;
use crate::db::types::UserRole;

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub organization_id: Option<String>,
}

/// What read operations hand back: the stored record minus the password.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub organization_id: Option<String>,
    pub class_ids: Vec<String>,
    pub points: i32,
    pub last_activity: Option<String>,
}

impl UserResponse {
    pub fn from_db(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            organization_id: user.organization_id,
            class_ids: user.class_ids,
            points: user.points,
            last_activity: user.last_activity.map(format_timestamp),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Soft outcome for admin user deletion; business rejections land here
/// instead of an error.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserOutcome {
    pub success: bool,
    pub message: String,
}

impl DeleteUserOutcome {
    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }

    pub(crate) fn deleted(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}
