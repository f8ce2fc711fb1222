use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::Class;

/// Soft outcome for joining by code: either the class or a human-readable
/// reason.
#[derive(Debug, Clone, Serialize)]
pub struct JoinClassOutcome {
    pub class: Option<Class>,
    pub error: Option<String>,
}

impl JoinClassOutcome {
    pub(crate) fn joined(class: Class) -> Self {
        Self { class: Some(class), error: None }
    }

    pub(crate) fn rejected(error: impl Into<String>) -> Self {
        Self { class: None, error: Some(error.into()) }
    }
}

/// One parsed row of a roster upload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RosterRow {
    #[serde(default)]
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RosterImportSummary {
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}
