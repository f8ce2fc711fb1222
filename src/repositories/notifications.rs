use uuid::Uuid;

use crate::core::time::now_utc;
use crate::db::keys;
use crate::db::models::Notification;
use crate::store::{Store, StoreError};

pub(crate) struct NewNotification<'a> {
    pub(crate) user_id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) message: String,
    pub(crate) link: Option<&'a str>,
}

/// Prepends so the default read order is newest-first.
pub(crate) fn create(store: &Store, params: NewNotification<'_>) -> Result<(), StoreError> {
    let notification = Notification {
        id: Uuid::new_v4().to_string(),
        user_id: params.user_id.to_string(),
        title: params.title.to_string(),
        message: params.message,
        link: params.link.map(str::to_string),
        is_read: false,
        created_at: now_utc(),
    };
    store.update(keys::NOTIFICATIONS, |rows: &mut Vec<Notification>| {
        rows.insert(0, notification)
    })
}

pub fn for_user(store: &Store, user_id: &str) -> Result<Vec<Notification>, StoreError> {
    let rows: Vec<Notification> = store.get(keys::NOTIFICATIONS)?;
    Ok(rows.into_iter().filter(|n| n.user_id == user_id).collect())
}

/// Marks one notification read; the user id must match the target.
pub fn mark_read(store: &Store, notification_id: &str, user_id: &str) -> Result<bool, StoreError> {
    store.update(keys::NOTIFICATIONS, |rows: &mut Vec<Notification>| {
        match rows.iter_mut().find(|n| n.id == notification_id && n.user_id == user_id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    })
}

pub fn mark_all_read(store: &Store, user_id: &str) -> Result<(), StoreError> {
    store.update(keys::NOTIFICATIONS, |rows: &mut Vec<Notification>| {
        for notification in rows.iter_mut().filter(|n| n.user_id == user_id) {
            notification.is_read = true;
        }
    })
}

pub(crate) fn remove_for_users(store: &Store, user_ids: &[String]) -> Result<(), StoreError> {
    store.update(keys::NOTIFICATIONS, |rows: &mut Vec<Notification>| {
        rows.retain(|n| !user_ids.contains(&n.user_id))
    })
}
