use uuid::Uuid;

use crate::core::time::now_utc;
use crate::db::models::{Question, Quiz};
use crate::db::types::ContentState;
use crate::repositories::{assignments, attempts, quizzes, users};
use crate::schemas::quiz::{NewQuestion, QuizUpdate};
use crate::services::classes::{require_teacher, AuthoringError};
use crate::store::{Store, StoreError};

pub fn create_quiz(
    store: &Store,
    teacher_id: &str,
    title: &str,
    questions: Vec<NewQuestion>,
) -> Result<Quiz, AuthoringError> {
    let teacher = require_teacher(store, teacher_id)?;
    let organization_id = teacher
        .organization_id
        .ok_or_else(|| AuthoringError::TeacherNotFound(teacher_id.to_string()))?;

    let quiz = Quiz {
        id: Uuid::new_v4().to_string(),
        teacher_id: teacher_id.to_string(),
        organization_id,
        title: title.to_string(),
        questions: questions
            .into_iter()
            .map(|question| question.into_question(Uuid::new_v4().to_string()))
            .collect(),
        state: ContentState::Active,
    };
    quizzes::insert(store, quiz.clone())?;
    users::touch_activity(store, teacher_id, now_utc())?;

    tracing::info!(quiz_id = %quiz.id, teacher_id, questions = quiz.questions.len(), "Quiz created");
    Ok(quiz)
}

/// Replaces title and questions. Question ids are preserved positionally
/// where the previous list has an entry at that index; appended positions get
/// fresh ids.
pub fn update_quiz(
    store: &Store,
    quiz_id: &str,
    update: QuizUpdate,
) -> Result<Option<Quiz>, StoreError> {
    let updated = quizzes::modify(store, quiz_id, |quiz| {
        let questions: Vec<Question> = update
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| {
                let id = quiz
                    .questions
                    .get(index)
                    .map(|existing| existing.id.clone())
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                question.into_question(id)
            })
            .collect();
        quiz.title = update.title;
        quiz.questions = questions;
        quiz.clone()
    })?;
    if let Some(quiz) = &updated {
        users::touch_activity(store, &quiz.teacher_id, now_utc())?;
    }
    Ok(updated)
}

/// Copies the quiz under a fresh id; the copy starts active and keeps the
/// source's question ids.
pub fn duplicate_quiz(store: &Store, quiz_id: &str) -> Result<Option<Quiz>, StoreError> {
    let Some(original) = quizzes::find_by_id(store, quiz_id)? else {
        return Ok(None);
    };
    let copy = Quiz {
        id: Uuid::new_v4().to_string(),
        title: format!("Copy of {}", original.title),
        state: ContentState::Active,
        ..original
    };
    quizzes::insert(store, copy.clone())?;
    users::touch_activity(store, &copy.teacher_id, now_utc())?;
    Ok(Some(copy))
}

pub fn set_archived(
    store: &Store,
    quiz_id: &str,
    archived: bool,
) -> Result<Option<Quiz>, StoreError> {
    quizzes::modify(store, quiz_id, |quiz| {
        if !quiz.state.is_deleted() {
            quiz.state = if archived { ContentState::Archived } else { ContentState::Active };
        }
        quiz.clone()
    })
}

pub fn soft_delete_quiz(store: &Store, quiz_id: &str) -> Result<Option<Quiz>, StoreError> {
    quizzes::modify(store, quiz_id, |quiz| {
        quiz.state = ContentState::Deleted;
        quiz.clone()
    })
}

pub fn restore_quiz(store: &Store, quiz_id: &str) -> Result<Option<Quiz>, StoreError> {
    quizzes::modify(store, quiz_id, |quiz| {
        if quiz.state.is_deleted() {
            quiz.state = ContentState::Active;
        }
        quiz.clone()
    })
}

/// Removes the row and cascades to assignments and attempts referencing the
/// quiz.
pub fn permanently_delete_quiz(store: &Store, quiz_id: &str) -> Result<(), StoreError> {
    quizzes::remove(store, quiz_id)?;
    assignments::remove_by_quiz(store, quiz_id)?;
    attempts::remove_by_quiz(store, quiz_id)?;
    tracing::info!(quiz_id, "Quiz permanently deleted");
    Ok(())
}

/// Deleted quizzes are hidden, archived ones stay visible. Empty when the
/// teacher is missing or org-less.
pub fn quizzes_by_teacher(store: &Store, teacher_id: &str) -> Result<Vec<Quiz>, StoreError> {
    let Some(teacher) = users::find_by_id(store, teacher_id)? else {
        return Ok(Vec::new());
    };
    let Some(organization_id) = teacher.organization_id else {
        return Ok(Vec::new());
    };
    Ok(quizzes::list_all(store)?
        .into_iter()
        .filter(|quiz| {
            quiz.teacher_id == teacher_id
                && quiz.organization_id == organization_id
                && !quiz.state.is_deleted()
        })
        .collect())
}
