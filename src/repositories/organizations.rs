use crate::db::keys;
use crate::db::models::Organization;
use crate::db::types::OrganizationStatus;
use crate::store::{Store, StoreError};

pub fn list_all(store: &Store) -> Result<Vec<Organization>, StoreError> {
    store.get(keys::ORGANIZATIONS)
}

pub fn list_pending(store: &Store) -> Result<Vec<Organization>, StoreError> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|org| org.status == OrganizationStatus::Pending)
        .collect())
}

pub fn find_by_id(store: &Store, id: &str) -> Result<Option<Organization>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|org| org.id == id))
}

/// Case-insensitive code lookup; only approved organizations are joinable.
pub fn find_approved_by_code(store: &Store, code: &str) -> Result<Option<Organization>, StoreError> {
    Ok(list_all(store)?.into_iter().find(|org| {
        org.status == OrganizationStatus::Approved && org.code.eq_ignore_ascii_case(code)
    }))
}

pub(crate) fn insert(store: &Store, organization: Organization) -> Result<(), StoreError> {
    store.update(keys::ORGANIZATIONS, |rows: &mut Vec<Organization>| rows.push(organization))
}

pub(crate) fn set_status(
    store: &Store,
    id: &str,
    status: OrganizationStatus,
) -> Result<Option<Organization>, StoreError> {
    store.update(keys::ORGANIZATIONS, |rows: &mut Vec<Organization>| {
        rows.iter_mut().find(|org| org.id == id).map(|org| {
            org.status = status;
            org.clone()
        })
    })
}

pub(crate) fn remove(store: &Store, id: &str) -> Result<(), StoreError> {
    store.update(keys::ORGANIZATIONS, |rows: &mut Vec<Organization>| {
        rows.retain(|org| org.id != id)
    })
}
