use time::OffsetDateTime;

use crate::db::keys;
use crate::db::models::User;
use crate::db::types::UserRole;
use crate::store::{Store, StoreError};

pub(crate) fn list_all(store: &Store) -> Result<Vec<User>, StoreError> {
    store.get(keys::USERS)
}

pub(crate) fn find_by_id(store: &Store, id: &str) -> Result<Option<User>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|user| user.id == id))
}

pub(crate) fn find_by_email(store: &Store, email: &str) -> Result<Option<User>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|user| user.email == email))
}

/// Case-insensitive match, used by roster reconciliation.
pub(crate) fn find_by_email_ci(store: &Store, email: &str) -> Result<Option<User>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|user| user.email.eq_ignore_ascii_case(email)))
}

pub(crate) fn list_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<Vec<User>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|user| user.organization_id.as_deref() == Some(organization_id))
        .collect())
}

pub(crate) fn find_org_admin(
    store: &Store,
    organization_id: &str,
) -> Result<Option<User>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|user| {
        user.role == UserRole::Admin && user.organization_id.as_deref() == Some(organization_id)
    }))
}

pub(crate) fn find_super_admin(store: &Store) -> Result<Option<User>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|user| user.role == UserRole::SuperAdmin))
}

pub(crate) fn insert(store: &Store, user: User) -> Result<(), StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| rows.push(user))
}

pub(crate) fn touch_activity(
    store: &Store,
    user_id: &str,
    now: OffsetDateTime,
) -> Result<(), StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| {
        if let Some(user) = rows.iter_mut().find(|user| user.id == user_id) {
            user.last_activity = Some(now);
        }
    })
}

pub(crate) fn add_points(store: &Store, user_id: &str, points: i32) -> Result<(), StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| {
        if let Some(user) = rows.iter_mut().find(|user| user.id == user_id) {
            user.points += points;
        }
    })
}

/// Idempotent membership add on the student side; returns whether the class
/// id was newly added.
pub(crate) fn add_class_membership(
    store: &Store,
    user_id: &str,
    class_id: &str,
) -> Result<bool, StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| {
        let Some(user) = rows.iter_mut().find(|user| user.id == user_id) else {
            return false;
        };
        if user.class_ids.iter().any(|id| id == class_id) {
            return false;
        }
        user.class_ids.push(class_id.to_string());
        true
    })
}

pub(crate) fn remove_class_membership(
    store: &Store,
    user_id: &str,
    class_id: &str,
) -> Result<(), StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| {
        if let Some(user) = rows.iter_mut().find(|user| user.id == user_id) {
            user.class_ids.retain(|id| id != class_id);
        }
    })
}

pub(crate) fn remove(store: &Store, user_id: &str) -> Result<(), StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| rows.retain(|user| user.id != user_id))
}

pub(crate) fn remove_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<(), StoreError> {
    store.update(keys::USERS, |rows: &mut Vec<User>| {
        rows.retain(|user| user.organization_id.as_deref() != Some(organization_id))
    })
}
