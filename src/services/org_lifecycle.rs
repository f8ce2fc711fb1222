use uuid::Uuid;

use crate::db::models::Organization;
use crate::db::types::OrganizationStatus;
use crate::repositories::{
    assignments, attempts, classes, notifications, organizations, quizzes, users,
};
use crate::schemas::organization::OrganizationCreate;
use crate::services::join_codes;
use crate::store::{Store, StoreError};

/// Registers an organization in pending state and notifies the super-admin.
pub fn create_organization(
    store: &Store,
    data: OrganizationCreate,
) -> Result<Organization, StoreError> {
    let organization = Organization {
        id: Uuid::new_v4().to_string(),
        code: join_codes::organization_code(&data.name),
        status: OrganizationStatus::Pending,
        name: data.name,
        website: data.website,
        mobile: data.mobile,
        address: data.address,
        country: data.country,
    };
    organizations::insert(store, organization.clone())?;

    if let Some(super_admin) = users::find_super_admin(store)? {
        notifications::create(
            store,
            notifications::NewNotification {
                user_id: &super_admin.id,
                title: "New Organization Pending",
                message: format!(
                    "\"{}\" has registered and is awaiting your approval.",
                    organization.name
                ),
                link: Some("/superadmin"),
            },
        )?;
    }

    tracing::info!(
        organization_id = %organization.id,
        code = %organization.code,
        "Organization registered"
    );
    Ok(organization)
}

/// Approves a pending organization and notifies its admin.
pub fn approve_organization(
    store: &Store,
    organization_id: &str,
) -> Result<Option<Organization>, StoreError> {
    let Some(organization) =
        organizations::set_status(store, organization_id, OrganizationStatus::Approved)?
    else {
        return Ok(None);
    };

    if let Some(admin) = users::find_org_admin(store, organization_id)? {
        notifications::create(
            store,
            notifications::NewNotification {
                user_id: &admin.id,
                title: "Organization Approved!",
                message: format!(
                    "Your organization \"{}\" has been approved. You can now access your dashboard.",
                    organization.name
                ),
                link: Some("/admin"),
            },
        )?;
    }

    tracing::info!(organization_id = %organization.id, "Organization approved");
    Ok(Some(organization))
}

pub fn reject_organization(
    store: &Store,
    organization_id: &str,
) -> Result<Option<Organization>, StoreError> {
    organizations::set_status(store, organization_id, OrganizationStatus::Rejected)
}

/// Cascading delete: removes the organization, its users, classes, quizzes
/// and attempts, every assignment referencing its classes or quizzes, and
/// every notification for its removed users. Each filter reads a
/// pre-deletion snapshot, so ordering does not matter.
pub fn delete_organization(store: &Store, organization_id: &str) -> Result<(), StoreError> {
    let user_ids: Vec<String> = users::list_by_organization(store, organization_id)?
        .into_iter()
        .map(|user| user.id)
        .collect();
    let class_ids: Vec<String> = classes::list_by_organization(store, organization_id)?
        .into_iter()
        .map(|class| class.id)
        .collect();
    let quiz_ids: Vec<String> = quizzes::list_by_organization(store, organization_id)?
        .into_iter()
        .map(|quiz| quiz.id)
        .collect();

    organizations::remove(store, organization_id)?;
    users::remove_by_organization(store, organization_id)?;
    classes::remove_by_organization(store, organization_id)?;
    quizzes::remove_by_organization(store, organization_id)?;
    attempts::remove_by_organization(store, organization_id)?;
    assignments::remove_referencing(store, &class_ids, &quiz_ids)?;
    notifications::remove_for_users(store, &user_ids)?;

    tracing::info!(
        organization_id,
        users = user_ids.len(),
        classes = class_ids.len(),
        quizzes = quiz_ids.len(),
        "Organization deleted"
    );
    Ok(())
}
