use serde::Deserialize;

use crate::db::models::AnswerRecord;

#[derive(Debug, Clone, Deserialize)]
pub struct AttemptSubmission {
    pub quiz_id: String,
    pub student_id: String,
    pub answers: Vec<AnswerRecord>,
}
