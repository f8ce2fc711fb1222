//! Collection keys, one per logical table.

pub(crate) const ORGANIZATIONS: &str = "gesquiz_organizations";
pub(crate) const USERS: &str = "gesquiz_users";
pub(crate) const CLASSES: &str = "gesquiz_classes";
pub(crate) const QUIZZES: &str = "gesquiz_quizzes";
pub(crate) const ASSIGNMENTS: &str = "gesquiz_assignments";
pub(crate) const ATTEMPTS: &str = "gesquiz_attempts";
pub(crate) const STUDENT_ARCHIVES: &str = "gesquiz_student_archives";
pub(crate) const NOTIFICATIONS: &str = "gesquiz_notifications";
