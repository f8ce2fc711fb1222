use serde::{Deserialize, Serialize};

use crate::db::models::{Assignment, Class, Question, QuestionBody, Quiz};

/// A question as authored, before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl NewQuestion {
    pub(crate) fn into_question(self, id: String) -> Question {
        Question { id, question_text: self.question_text, body: self.body }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizUpdate {
    pub title: String,
    pub questions: Vec<NewQuestion>,
}

/// An assigned quiz as seen from a student's dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StudentQuiz {
    pub quiz: Quiz,
    pub assignment: Assignment,
}

/// Recycle-bin listing for a teacher or a whole organization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletedContent {
    pub classes: Vec<Class>,
    pub quizzes: Vec<Quiz>,
}
