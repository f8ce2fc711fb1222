use crate::db::keys;
use crate::db::models::QuizAttempt;
use crate::store::{Store, StoreError};

pub fn list_by_student(store: &Store, student_id: &str) -> Result<Vec<QuizAttempt>, StoreError> {
    Ok(list_all(store)?.into_iter().filter(|a| a.student_id == student_id).collect())
}

pub fn list_by_quiz(store: &Store, quiz_id: &str) -> Result<Vec<QuizAttempt>, StoreError> {
    Ok(list_all(store)?.into_iter().filter(|a| a.quiz_id == quiz_id).collect())
}

pub fn list_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<Vec<QuizAttempt>, StoreError> {
    Ok(list_all(store)?.into_iter().filter(|a| a.organization_id == organization_id).collect())
}

pub fn find_by_id(store: &Store, id: &str) -> Result<Option<QuizAttempt>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|a| a.id == id))
}

pub(crate) fn insert(store: &Store, attempt: QuizAttempt) -> Result<(), StoreError> {
    store.update(keys::ATTEMPTS, |rows: &mut Vec<QuizAttempt>| rows.push(attempt))
}

pub(crate) fn remove_by_student(store: &Store, student_id: &str) -> Result<(), StoreError> {
    store.update(keys::ATTEMPTS, |rows: &mut Vec<QuizAttempt>| {
        rows.retain(|a| a.student_id != student_id)
    })
}

pub(crate) fn remove_by_quiz(store: &Store, quiz_id: &str) -> Result<(), StoreError> {
    store
        .update(keys::ATTEMPTS, |rows: &mut Vec<QuizAttempt>| rows.retain(|a| a.quiz_id != quiz_id))
}

pub(crate) fn remove_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<(), StoreError> {
    store.update(keys::ATTEMPTS, |rows: &mut Vec<QuizAttempt>| {
        rows.retain(|a| a.organization_id != organization_id)
    })
}

fn list_all(store: &Store) -> Result<Vec<QuizAttempt>, StoreError> {
    store.get(keys::ATTEMPTS)
}
