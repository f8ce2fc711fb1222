use thiserror::Error;
use uuid::Uuid;

use crate::core::time::now_utc;
use crate::db::models::{AnswerRecord, QuestionBody, Quiz, QuizAttempt};
use crate::repositories::{attempts, notifications, quizzes, users};
use crate::schemas::attempt::AttemptSubmission;
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum GradingError {
    #[error("student {0} not found")]
    StudentNotFound(String),
    #[error("quiz {0} not found")]
    QuizNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Grades and records a submission. Resubmissions append a fresh attempt
/// rather than replacing the earlier one. The earned score is credited to the
/// student's points and the quiz's teacher is notified.
pub fn save_attempt(
    store: &Store,
    submission: AttemptSubmission,
) -> Result<QuizAttempt, GradingError> {
    let student = users::find_by_id(store, &submission.student_id)?
        .ok_or_else(|| GradingError::StudentNotFound(submission.student_id.clone()))?;
    // The attempt's organization is derived from the student; an org-less
    // account has nowhere to submit to.
    let organization_id = student
        .organization_id
        .clone()
        .ok_or_else(|| GradingError::StudentNotFound(submission.student_id.clone()))?;
    let quiz = quizzes::find_by_id(store, &submission.quiz_id)?
        .ok_or_else(|| GradingError::QuizNotFound(submission.quiz_id.clone()))?;

    let (score, max_score) = grade(&quiz, &submission.answers);
    let attempt = QuizAttempt {
        id: Uuid::new_v4().to_string(),
        quiz_id: quiz.id.clone(),
        student_id: student.id.clone(),
        organization_id,
        answers: submission.answers,
        score,
        max_score,
        submitted_at: now_utc(),
    };
    attempts::insert(store, attempt.clone())?;

    users::add_points(store, &student.id, score)?;

    notifications::create(
        store,
        notifications::NewNotification {
            user_id: &quiz.teacher_id,
            title: "Quiz Submitted",
            message: format!(
                "{} submitted \"{}\" and scored {score}/{max_score}.",
                student.full_name(),
                quiz.title
            ),
            link: Some("/teacher"),
        },
    )?;

    tracing::info!(
        attempt_id = %attempt.id,
        quiz_id = %quiz.id,
        student_id = %student.id,
        score,
        max_score,
        "Attempt recorded"
    );
    Ok(attempt)
}

/// Choice and true/false questions are worth one point, drag-and-drop one
/// point per item with partial credit. Answers are matched to questions by
/// question id; unanswered questions still count toward the maximum.
fn grade(quiz: &Quiz, answers: &[AnswerRecord]) -> (i32, i32) {
    let mut score = 0;
    let mut max_score = 0;
    for question in &quiz.questions {
        let answer = answers.iter().find(|answer| answer.question_id == question.id);
        match &question.body {
            QuestionBody::MultipleChoice { .. } | QuestionBody::TrueFalse { .. } => {
                max_score += 1;
                if answer.is_some_and(|answer| answer.is_correct) {
                    score += 1;
                }
            }
            QuestionBody::DragAndDrop { items, correct_mapping, .. } => {
                max_score += items.len() as i32;
                if let Some(mapping) = answer.and_then(|answer| answer.mapping.as_ref()) {
                    score += correct_mapping
                        .iter()
                        .filter(|(item, target)| mapping.get(item.as_str()) == Some(*target))
                        .count() as i32;
                }
            }
        }
    }
    (score, max_score)
}

pub fn attempts_by_student(
    store: &Store,
    student_id: &str,
) -> Result<Vec<QuizAttempt>, StoreError> {
    attempts::list_by_student(store, student_id)
}

pub fn attempts_by_quiz(store: &Store, quiz_id: &str) -> Result<Vec<QuizAttempt>, StoreError> {
    attempts::list_by_quiz(store, quiz_id)
}
