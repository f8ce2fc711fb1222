use thiserror::Error;
use uuid::Uuid;

use crate::core::time::now_utc;
use crate::db::models::{Class, User};
use crate::db::types::ContentState;
use crate::repositories::{assignments, classes, notifications, users};
use crate::services::join_codes;
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum AuthoringError {
    #[error("teacher {0} not found or not attached to an organization")]
    TeacherNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolves a teacher that is attached to an organization; authoring
/// operations hard-fail without one.
pub(crate) fn require_teacher(store: &Store, teacher_id: &str) -> Result<User, AuthoringError> {
    users::find_by_id(store, teacher_id)?
        .filter(|user| user.organization_id.is_some())
        .ok_or_else(|| AuthoringError::TeacherNotFound(teacher_id.to_string()))
}

pub fn create_class(store: &Store, name: &str, teacher_id: &str) -> Result<Class, AuthoringError> {
    let teacher = require_teacher(store, teacher_id)?;
    let organization_id = teacher
        .organization_id
        .clone()
        .ok_or_else(|| AuthoringError::TeacherNotFound(teacher_id.to_string()))?;

    let class = Class {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        teacher_id: teacher_id.to_string(),
        organization_id: organization_id.clone(),
        code: join_codes::class_code(name),
        student_ids: Vec::new(),
        state: ContentState::Active,
    };
    classes::insert(store, class.clone())?;
    users::touch_activity(store, teacher_id, now_utc())?;

    if let Some(admin) = users::find_org_admin(store, &organization_id)? {
        notifications::create(
            store,
            notifications::NewNotification {
                user_id: &admin.id,
                title: "New Class Created",
                message: format!(
                    "{} created a new class: \"{}\".",
                    teacher.full_name(),
                    class.name
                ),
                link: Some("/admin"),
            },
        )?;
    }

    tracing::info!(class_id = %class.id, teacher_id, code = %class.code, "Class created");
    Ok(class)
}

/// Silent no-op style: `None` when the class id misses.
pub fn rename_class(
    store: &Store,
    class_id: &str,
    new_name: &str,
) -> Result<Option<Class>, StoreError> {
    let renamed = classes::modify(store, class_id, |class| {
        class.name = new_name.to_string();
        class.clone()
    })?;
    if let Some(class) = &renamed {
        users::touch_activity(store, &class.teacher_id, now_utc())?;
    }
    Ok(renamed)
}

pub fn reassign_teacher(
    store: &Store,
    class_id: &str,
    new_teacher_id: &str,
) -> Result<Option<Class>, StoreError> {
    classes::modify(store, class_id, |class| {
        class.teacher_id = new_teacher_id.to_string();
        class.clone()
    })
}

/// Archive or unarchive. Deleted classes stay deleted; restoring them is the
/// recycle bin's job.
pub fn set_archived(
    store: &Store,
    class_id: &str,
    archived: bool,
) -> Result<Option<Class>, StoreError> {
    classes::modify(store, class_id, |class| {
        if !class.state.is_deleted() {
            class.state = if archived { ContentState::Archived } else { ContentState::Active };
        }
        class.clone()
    })
}

/// Soft delete: recoverable via [`restore_class`].
pub fn soft_delete_class(store: &Store, class_id: &str) -> Result<Option<Class>, StoreError> {
    classes::modify(store, class_id, |class| {
        class.state = ContentState::Deleted;
        class.clone()
    })
}

pub fn restore_class(store: &Store, class_id: &str) -> Result<Option<Class>, StoreError> {
    classes::modify(store, class_id, |class| {
        if class.state.is_deleted() {
            class.state = ContentState::Active;
        }
        class.clone()
    })
}

/// Removes the row and cascades to assignments referencing the class.
pub fn permanently_delete_class(store: &Store, class_id: &str) -> Result<(), StoreError> {
    classes::remove(store, class_id)?;
    assignments::remove_by_class(store, class_id)?;
    tracing::info!(class_id, "Class permanently deleted");
    Ok(())
}

/// The teacher's own listing: deleted classes are hidden, archived ones stay
/// visible. Empty when the teacher is missing or org-less.
pub fn classes_by_teacher(store: &Store, teacher_id: &str) -> Result<Vec<Class>, StoreError> {
    let Some(teacher) = users::find_by_id(store, teacher_id)? else {
        return Ok(Vec::new());
    };
    let Some(organization_id) = teacher.organization_id else {
        return Ok(Vec::new());
    };
    Ok(classes::list_all(store)?
        .into_iter()
        .filter(|class| {
            class.teacher_id == teacher_id
                && class.organization_id == organization_id
                && !class.state.is_deleted()
        })
        .collect())
}
