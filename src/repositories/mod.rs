pub mod assignments;
pub mod attempts;
pub mod classes;
pub mod notifications;
pub mod organizations;
pub mod quizzes;
pub mod student_archives;
pub mod users;
