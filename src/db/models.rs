use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::types::{ContentState, OrganizationStatus, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// Unique join code, matched case-insensitively.
    pub code: String,
    pub status: OrganizationStatus,
    pub website: String,
    pub mobile: String,
    pub address: String,
    pub country: String,
}

/// Stored user record. The password never leaves the crate: every public
/// read path goes through [`crate::schemas::user::UserResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub(crate) password: String,
    pub role: UserRole,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    /// Absent only for the super-admin.
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Classes the student belongs to.
    #[serde(default)]
    pub class_ids: Vec<String>,
    /// Cumulative score earned across attempts.
    #[serde(default)]
    pub points: i32,
    /// Last authoring action, tracked for teachers and admins.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_activity: Option<OffsetDateTime>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub teacher_id: String,
    pub organization_id: String,
    /// Unique join code, matched case-insensitively.
    pub code: String,
    pub student_ids: Vec<String>,
    #[serde(default)]
    pub state: ContentState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable once created; preserved positionally across quiz edits.
    pub id: String,
    pub question_text: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionBody {
    MultipleChoice {
        options: Vec<String>,
        correct_answer_index: usize,
    },
    TrueFalse {
        correct_answer: bool,
    },
    DragAndDrop {
        items: Vec<String>,
        targets: Vec<String>,
        /// Item index (as a decimal string) -> target index.
        correct_mapping: HashMap<String, usize>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub teacher_id: String,
    pub organization_id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub state: ContentState,
}

/// Makes one quiz available to one class from a given time. At most one
/// assignment exists per (quiz, class) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub quiz_id: String,
    pub class_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub available_from: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    /// Set by the quiz player for choice and true/false questions.
    #[serde(default)]
    pub is_correct: bool,
    /// Submitted item index (as a decimal string) -> target index, for
    /// drag-and-drop questions.
    #[serde(default)]
    pub mapping: Option<HashMap<String, usize>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub student_id: String,
    /// Derived from the submitting student.
    pub organization_id: String,
    pub answers: Vec<AnswerRecord>,
    pub score: i32,
    pub max_score: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A student's personal hide toggle for a quiz, independent of the quiz's
/// own state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentArchive {
    pub student_id: String,
    pub quiz_id: String,
}
