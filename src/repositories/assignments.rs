use crate::db::keys;
use crate::db::models::Assignment;
use crate::store::{Store, StoreError};

pub fn list_all(store: &Store) -> Result<Vec<Assignment>, StoreError> {
    store.get(keys::ASSIGNMENTS)
}

pub fn list_by_class(store: &Store, class_id: &str) -> Result<Vec<Assignment>, StoreError> {
    Ok(list_all(store)?.into_iter().filter(|a| a.class_id == class_id).collect())
}

pub fn list_by_quiz(store: &Store, quiz_id: &str) -> Result<Vec<Assignment>, StoreError> {
    Ok(list_all(store)?.into_iter().filter(|a| a.quiz_id == quiz_id).collect())
}

pub fn find_pair(
    store: &Store,
    quiz_id: &str,
    class_id: &str,
) -> Result<Option<Assignment>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|a| a.quiz_id == quiz_id && a.class_id == class_id))
}

pub(crate) fn insert(store: &Store, assignment: Assignment) -> Result<(), StoreError> {
    store.update(keys::ASSIGNMENTS, |rows: &mut Vec<Assignment>| rows.push(assignment))
}

pub(crate) fn remove_by_class(store: &Store, class_id: &str) -> Result<(), StoreError> {
    store.update(keys::ASSIGNMENTS, |rows: &mut Vec<Assignment>| {
        rows.retain(|a| a.class_id != class_id)
    })
}

pub(crate) fn remove_by_quiz(store: &Store, quiz_id: &str) -> Result<(), StoreError> {
    store
        .update(keys::ASSIGNMENTS, |rows: &mut Vec<Assignment>| rows.retain(|a| a.quiz_id != quiz_id))
}

/// Drops every assignment referencing a deleted class or quiz.
pub(crate) fn remove_referencing(
    store: &Store,
    class_ids: &[String],
    quiz_ids: &[String],
) -> Result<(), StoreError> {
    store.update(keys::ASSIGNMENTS, |rows: &mut Vec<Assignment>| {
        rows.retain(|a| !class_ids.contains(&a.class_id) && !quiz_ids.contains(&a.quiz_id))
    })
}
