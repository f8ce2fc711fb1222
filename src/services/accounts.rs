use uuid::Uuid;

use crate::db::models::User;
use crate::db::types::UserRole;
use crate::repositories::{attempts, classes, quizzes, users};
use crate::schemas::user::{DeleteUserOutcome, NewUser, UserResponse};
use crate::store::{Store, StoreError};

/// Case-sensitive plaintext credential check. Returns the user sans password,
/// or `None` on a mismatch or a missing account.
pub fn verify_user(
    store: &Store,
    email: &str,
    password: &str,
) -> Result<Option<UserResponse>, StoreError> {
    Ok(users::find_by_email(store, email)?
        .filter(|user| user.password == password)
        .map(UserResponse::from_db))
}

pub fn create_user(store: &Store, data: NewUser, password: &str) -> Result<UserResponse, StoreError> {
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: data.email,
        password: password.to_string(),
        role: data.role,
        first_name: data.first_name,
        middle_name: data.middle_name,
        last_name: data.last_name,
        organization_id: data.organization_id,
        class_ids: Vec::new(),
        points: 0,
        last_activity: None,
    };
    users::insert(store, user.clone())?;
    tracing::info!(user_id = %user.id, role = ?user.role, "User created");
    Ok(UserResponse::from_db(user))
}

pub fn user_by_id(store: &Store, user_id: &str) -> Result<Option<UserResponse>, StoreError> {
    Ok(users::find_by_id(store, user_id)?.map(UserResponse::from_db))
}

pub fn users_by_organization(
    store: &Store,
    organization_id: &str,
) -> Result<Vec<UserResponse>, StoreError> {
    Ok(users::list_by_organization(store, organization_id)?
        .into_iter()
        .map(UserResponse::from_db)
        .collect())
}

/// Admin-initiated deletion with guardrails. Business rejections come back as
/// a `success = false` outcome, never as an error.
pub fn delete_user(
    store: &Store,
    user_id: &str,
    performing_admin_id: &str,
) -> Result<DeleteUserOutcome, StoreError> {
    let Some(target) = users::find_by_id(store, user_id)? else {
        return Ok(DeleteUserOutcome::rejected("User not found."));
    };
    let performer = users::find_by_id(store, performing_admin_id)?;
    if performer.map_or(true, |admin| admin.role != UserRole::Admin) {
        return Ok(DeleteUserOutcome::rejected("Invalid admin credentials."));
    }

    if target.id == performing_admin_id {
        return Ok(DeleteUserOutcome::rejected("Admins cannot delete their own account."));
    }
    if target.role == UserRole::Admin {
        return Ok(DeleteUserOutcome::rejected("Admins cannot delete other admin accounts."));
    }

    if target.role == UserRole::Teacher {
        let has_active_content = classes::any_active_for_teacher(store, user_id)?
            || quizzes::any_active_for_teacher(store, user_id)?;
        if has_active_content {
            return Ok(DeleteUserOutcome::rejected(
                "Cannot delete teacher. They are assigned to active (non-archived) classes or \
                 quizzes. Please reassign or delete the content first.",
            ));
        }
    }

    if target.role == UserRole::Student {
        classes::remove_student_from_all(store, user_id)?;
        attempts::remove_by_student(store, user_id)?;
    }

    users::remove(store, user_id)?;
    tracing::info!(user_id, performing_admin_id, "User permanently deleted");
    Ok(DeleteUserOutcome::deleted(format!(
        "User {} has been permanently deleted.",
        target.full_name()
    )))
}
