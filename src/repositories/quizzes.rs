use crate::db::keys;
use crate::db::models::Quiz;
use crate::db::types::ContentState;
use crate::store::{Store, StoreError};

pub fn list_all(store: &Store) -> Result<Vec<Quiz>, StoreError> {
    store.get(keys::QUIZZES)
}

pub fn find_by_id(store: &Store, id: &str) -> Result<Option<Quiz>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|quiz| quiz.id == id))
}

pub fn list_by_organization(store: &Store, organization_id: &str) -> Result<Vec<Quiz>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|quiz| quiz.organization_id == organization_id)
        .collect())
}

pub(crate) fn any_active_for_teacher(store: &Store, teacher_id: &str) -> Result<bool, StoreError> {
    Ok(list_all(store)?.iter().any(|quiz| quiz.teacher_id == teacher_id && quiz.state.is_active()))
}

pub(crate) fn insert(store: &Store, quiz: Quiz) -> Result<(), StoreError> {
    store.update(keys::QUIZZES, |rows: &mut Vec<Quiz>| rows.push(quiz))
}

/// Locate by id and mutate in place; `None` when the lookup misses.
pub(crate) fn modify<R>(
    store: &Store,
    id: &str,
    mutate: impl FnOnce(&mut Quiz) -> R,
) -> Result<Option<R>, StoreError> {
    store.update(keys::QUIZZES, |rows: &mut Vec<Quiz>| {
        rows.iter_mut().find(|quiz| quiz.id == id).map(mutate)
    })
}

pub(crate) fn remove(store: &Store, id: &str) -> Result<(), StoreError> {
    store.update(keys::QUIZZES, |rows: &mut Vec<Quiz>| rows.retain(|quiz| quiz.id != id))
}

pub(crate) fn remove_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<(), StoreError> {
    store.update(keys::QUIZZES, |rows: &mut Vec<Quiz>| {
        rows.retain(|quiz| quiz.organization_id != organization_id)
    })
}

pub(crate) fn list_deleted(
    store: &Store,
    organization_id: &str,
    teacher_id: Option<&str>,
) -> Result<Vec<Quiz>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|quiz| {
            quiz.organization_id == organization_id
                && quiz.state == ContentState::Deleted
                && teacher_id.map_or(true, |id| quiz.teacher_id == id)
        })
        .collect())
}
