pub mod accounts;
pub mod assignments;
pub mod classes;
pub mod enrollment;
pub mod grading;
pub(crate) mod join_codes;
pub mod org_lifecycle;
pub mod quizzes;
pub mod recycle_bin;
pub mod stats;
