use crate::db::types::UserRole;
use crate::repositories::{classes, quizzes, users};
use crate::schemas::stats::SystemStats;
use crate::store::{Store, StoreError};

/// Headline counts for one organization's admin dashboard. Archived and
/// soft-deleted content still counts; it belongs to the tenant until purged.
pub fn system_stats(store: &Store, organization_id: &str) -> Result<SystemStats, StoreError> {
    let org_users = users::list_by_organization(store, organization_id)?;
    Ok(SystemStats {
        total_teachers: org_users.iter().filter(|user| user.role == UserRole::Teacher).count(),
        total_students: org_users.iter().filter(|user| user.role == UserRole::Student).count(),
        total_classes: classes::list_by_organization(store, organization_id)?.len(),
        total_quizzes: quizzes::list_by_organization(store, organization_id)?.len(),
    })
}
