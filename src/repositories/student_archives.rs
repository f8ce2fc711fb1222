use crate::db::keys;
use crate::db::models::StudentArchive;
use crate::store::{Store, StoreError};

/// Flips the student's personal hide toggle for a quiz; returns whether the
/// quiz is now hidden.
pub fn toggle(store: &Store, student_id: &str, quiz_id: &str) -> Result<bool, StoreError> {
    store.update(keys::STUDENT_ARCHIVES, |rows: &mut Vec<StudentArchive>| {
        let before = rows.len();
        rows.retain(|a| !(a.student_id == student_id && a.quiz_id == quiz_id));
        if rows.len() != before {
            return false;
        }
        rows.push(StudentArchive {
            student_id: student_id.to_string(),
            quiz_id: quiz_id.to_string(),
        });
        true
    })
}

pub fn archived_quiz_ids(store: &Store, student_id: &str) -> Result<Vec<String>, StoreError> {
    let rows: Vec<StudentArchive> = store.get(keys::STUDENT_ARCHIVES)?;
    Ok(rows.into_iter().filter(|a| a.student_id == student_id).map(|a| a.quiz_id).collect())
}
