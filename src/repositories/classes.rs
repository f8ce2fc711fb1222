use crate::db::keys;
use crate::db::models::Class;
use crate::db::types::ContentState;
use crate::store::{Store, StoreError};

pub fn list_all(store: &Store) -> Result<Vec<Class>, StoreError> {
    store.get(keys::CLASSES)
}

pub fn find_by_id(store: &Store, id: &str) -> Result<Option<Class>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|class| class.id == id))
}

pub fn find_by_ids(store: &Store, ids: &[String]) -> Result<Vec<Class>, StoreError> {
    Ok(list_all(store)?.into_iter().filter(|class| ids.contains(&class.id)).collect())
}

/// Case-insensitive code lookup over joinable (active) classes.
pub fn find_active_by_code(store: &Store, code: &str) -> Result<Option<Class>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .find(|class| class.state.is_active() && class.code.eq_ignore_ascii_case(code)))
}

pub fn list_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<Vec<Class>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|class| class.organization_id == organization_id)
        .collect())
}

pub(crate) fn any_active_for_teacher(store: &Store, teacher_id: &str) -> Result<bool, StoreError> {
    Ok(list_all(store)?
        .iter()
        .any(|class| class.teacher_id == teacher_id && class.state.is_active()))
}

pub(crate) fn insert(store: &Store, class: Class) -> Result<(), StoreError> {
    store.update(keys::CLASSES, |rows: &mut Vec<Class>| rows.push(class))
}

/// Locate by id and mutate in place; `None` when the lookup misses.
pub(crate) fn modify<R>(
    store: &Store,
    id: &str,
    mutate: impl FnOnce(&mut Class) -> R,
) -> Result<Option<R>, StoreError> {
    store.update(keys::CLASSES, |rows: &mut Vec<Class>| {
        rows.iter_mut().find(|class| class.id == id).map(mutate)
    })
}

/// Idempotent roster add; `None` when the class is missing, otherwise whether
/// the student was newly added.
pub(crate) fn add_student(
    store: &Store,
    class_id: &str,
    student_id: &str,
) -> Result<Option<bool>, StoreError> {
    modify(store, class_id, |class| {
        if class.student_ids.iter().any(|id| id == student_id) {
            return false;
        }
        class.student_ids.push(student_id.to_string());
        true
    })
}

pub(crate) fn remove_student(
    store: &Store,
    class_id: &str,
    student_id: &str,
) -> Result<bool, StoreError> {
    Ok(modify(store, class_id, |class| {
        let before = class.student_ids.len();
        class.student_ids.retain(|id| id != student_id);
        class.student_ids.len() != before
    })?
    .unwrap_or(false))
}

pub(crate) fn remove_student_from_all(store: &Store, student_id: &str) -> Result<(), StoreError> {
    store.update(keys::CLASSES, |rows: &mut Vec<Class>| {
        for class in rows.iter_mut() {
            class.student_ids.retain(|id| id != student_id);
        }
    })
}

pub(crate) fn remove(store: &Store, id: &str) -> Result<(), StoreError> {
    store.update(keys::CLASSES, |rows: &mut Vec<Class>| rows.retain(|class| class.id != id))
}

pub(crate) fn remove_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<(), StoreError> {
    store.update(keys::CLASSES, |rows: &mut Vec<Class>| {
        rows.retain(|class| class.organization_id != organization_id)
    })
}

pub(crate) fn list_deleted(
    store: &Store,
    organization_id: &str,
    teacher_id: Option<&str>,
) -> Result<Vec<Class>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|class| {
            class.organization_id == organization_id
                && class.state == ContentState::Deleted
                && teacher_id.map_or(true, |id| class.teacher_id == id)
        })
        .collect())
}
