use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SystemStats {
    pub total_teachers: usize,
    pub total_students: usize,
    pub total_classes: usize,
    pub total_quizzes: usize,
}
