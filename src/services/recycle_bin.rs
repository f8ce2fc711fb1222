use crate::repositories::{classes, quizzes};
use crate::schemas::quiz::DeletedContent;
use crate::services::{classes as class_service, quizzes as quiz_service};
use crate::store::{Store, StoreError};

/// Soft-deleted classes and quizzes for an organization, optionally narrowed
/// to one teacher's content.
pub fn deleted_content(
    store: &Store,
    organization_id: &str,
    teacher_id: Option<&str>,
) -> Result<DeletedContent, StoreError> {
    Ok(DeletedContent {
        classes: classes::list_deleted(store, organization_id, teacher_id)?,
        quizzes: quizzes::list_deleted(store, organization_id, teacher_id)?,
    })
}

/// Permanently deletes everything currently in the bin, cascading like the
/// per-entity permanent deletes. Returns the purged entries.
pub fn empty_bin(
    store: &Store,
    organization_id: &str,
    teacher_id: Option<&str>,
) -> Result<DeletedContent, StoreError> {
    let purged = deleted_content(store, organization_id, teacher_id)?;
    for class in &purged.classes {
        class_service::permanently_delete_class(store, &class.id)?;
    }
    for quiz in &purged.quizzes {
        quiz_service::permanently_delete_quiz(store, &quiz.id)?;
    }
    tracing::info!(
        organization_id,
        classes = purged.classes.len(),
        quizzes = purged.quizzes.len(),
        "Recycle bin emptied"
    );
    Ok(purged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::{OrganizationStatus, UserRole};
    use crate::services::{classes as class_service, quizzes as quiz_service};
    use crate::test_support;

    #[test]
    fn bin_lists_only_soft_deleted_rows_for_the_organization() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let other = test_support::insert_organization(&store, "Shadewell", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let stranger = test_support::insert_user(&store, UserRole::Teacher, "t@sw.test", Some(&other.id));

        let deleted_class = test_support::insert_class(&store, &teacher, "Old Class");
        let kept_class = test_support::insert_class(&store, &teacher, "Current Class");
        let deleted_quiz = test_support::insert_quiz(&store, &teacher, "Old Quiz");
        let foreign_class = test_support::insert_class(&store, &stranger, "Foreign Class");

        class_service::soft_delete_class(&store, &deleted_class.id).expect("delete class");
        class_service::set_archived(&store, &kept_class.id, true).expect("archive class");
        quiz_service::soft_delete_quiz(&store, &deleted_quiz.id).expect("delete quiz");
        class_service::soft_delete_class(&store, &foreign_class.id).expect("delete foreign");

        let bin = deleted_content(&store, &org.id, None).expect("bin");
        assert_eq!(bin.classes.len(), 1);
        assert_eq!(bin.classes[0].id, deleted_class.id);
        assert_eq!(bin.quizzes.len(), 1);
        assert_eq!(bin.quizzes[0].id, deleted_quiz.id);
    }

    #[test]
    fn emptying_the_bin_purges_only_deleted_rows() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let doomed = test_support::insert_class(&store, &teacher, "Doomed");
        let kept = test_support::insert_class(&store, &teacher, "Kept");
        let doomed_quiz = test_support::insert_quiz(&store, &teacher, "Doomed Quiz");
        class_service::soft_delete_class(&store, &doomed.id).expect("delete class");
        quiz_service::soft_delete_quiz(&store, &doomed_quiz.id).expect("delete quiz");

        let purged = empty_bin(&store, &org.id, None).expect("empty");
        assert_eq!(purged.classes.len(), 1);
        assert_eq!(purged.quizzes.len(), 1);

        assert!(classes::find_by_id(&store, &doomed.id).expect("class").is_none());
        assert!(quizzes::find_by_id(&store, &doomed_quiz.id).expect("quiz").is_none());
        assert!(classes::find_by_id(&store, &kept.id).expect("class").is_some());
        assert!(deleted_content(&store, &org.id, None).expect("bin").classes.is_empty());
    }

    #[test]
    fn bin_can_be_narrowed_to_one_teacher() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let alice = test_support::insert_user(&store, UserRole::Teacher, "alice@bw.test", Some(&org.id));
        let bruno = test_support::insert_user(&store, UserRole::Teacher, "bruno@bw.test", Some(&org.id));

        let alices = test_support::insert_class(&store, &alice, "Alice's Class");
        let brunos = test_support::insert_class(&store, &bruno, "Bruno's Class");
        class_service::soft_delete_class(&store, &alices.id).expect("delete");
        class_service::soft_delete_class(&store, &brunos.id).expect("delete");

        let bin = deleted_content(&store, &org.id, Some(&alice.id)).expect("bin");
        assert_eq!(bin.classes.len(), 1);
        assert_eq!(bin.classes[0].id, alices.id);

        let whole_org = deleted_content(&store, &org.id, None).expect("bin");
        assert_eq!(whole_org.classes.len(), 2);
    }
}
