use validator::Validate;

use crate::db::types::UserRole;
use crate::repositories::{classes, notifications, users};
use crate::schemas::class::{JoinClassOutcome, RosterImportSummary, RosterRow};
use crate::schemas::user::{NewUser, UserResponse};
use crate::services::accounts;
use crate::store::{Store, StoreError};

const DEFAULT_STUDENT_PASSWORD: &str = "password";

/// Student self-enrollment by class code. Rejections carry a user-facing
/// message rather than an error; joining a class you are already in is a
/// quiet success.
pub fn join_class(
    store: &Store,
    student_id: &str,
    class_code: &str,
) -> Result<JoinClassOutcome, StoreError> {
    let Some(student) = users::find_by_id(store, student_id)? else {
        return Ok(JoinClassOutcome::rejected("Your user profile could not be found."));
    };
    let Some(class) = classes::find_active_by_code(store, class_code)? else {
        return Ok(JoinClassOutcome::rejected("Invalid or archived class code."));
    };
    if student.organization_id.as_deref() != Some(class.organization_id.as_str()) {
        return Ok(JoinClassOutcome::rejected(
            "This class code belongs to a different organization.",
        ));
    }

    let newly_added = classes::add_student(store, &class.id, student_id)?.unwrap_or(false);
    users::add_class_membership(store, student_id, &class.id)?;

    if newly_added {
        notifications::create(
            store,
            notifications::NewNotification {
                user_id: &class.teacher_id,
                title: "New Student Joined Class",
                message: format!(
                    "{} has joined your class \"{}\".",
                    student.full_name(),
                    class.name
                ),
                link: Some("/teacher"),
            },
        )?;
        tracing::info!(student_id, class_id = %class.id, "Student joined class");
    }

    let class = classes::find_by_id(store, &class.id)?.unwrap_or(class);
    Ok(JoinClassOutcome::joined(class))
}

/// Teacher-driven bulk enrollment. Each row is handled independently:
/// invalid rows are reported and skipped, existing students are enrolled,
/// unknown emails become fresh student accounts with the default password.
pub fn import_roster(
    store: &Store,
    class_id: &str,
    rows: Vec<RosterRow>,
) -> Result<Option<RosterImportSummary>, StoreError> {
    let Some(class) = classes::find_by_id(store, class_id)? else {
        return Ok(None);
    };

    let mut summary = RosterImportSummary::default();
    for row in rows {
        if let Err(failures) = row.validate() {
            summary.errors.push(format!("Row for \"{}\" is invalid: {failures}", row.email));
            continue;
        }

        let student = match users::find_by_email_ci(store, &row.email)? {
            Some(existing) => {
                if existing.role != UserRole::Student {
                    summary
                        .errors
                        .push(format!("User with email {} is not a student.", row.email));
                    continue;
                }
                if existing.organization_id.as_deref() != Some(class.organization_id.as_str()) {
                    summary
                        .errors
                        .push(format!("Student {} belongs to a different organization.", row.email));
                    continue;
                }
                existing
            }
            None => {
                let created = accounts::create_user(
                    store,
                    NewUser {
                        email: row.email.clone(),
                        role: UserRole::Student,
                        first_name: row.first_name.clone(),
                        middle_name: row.middle_name.clone(),
                        last_name: row.last_name.clone(),
                        organization_id: Some(class.organization_id.clone()),
                    },
                    DEFAULT_STUDENT_PASSWORD,
                )?;
                match users::find_by_id(store, &created.id)? {
                    Some(user) => user,
                    None => {
                        summary.errors.push(format!("Failed to create student {}.", row.email));
                        continue;
                    }
                }
            }
        };

        let newly_added = classes::add_student(store, class_id, &student.id)?.unwrap_or(false);
        users::add_class_membership(store, &student.id, class_id)?;
        if newly_added {
            summary.added += 1;
        } else {
            summary.skipped += 1;
        }
    }

    users::touch_activity(store, &class.teacher_id, crate::core::time::now_utc())?;
    tracing::info!(
        class_id,
        added = summary.added,
        skipped = summary.skipped,
        errors = summary.errors.len(),
        "Roster import finished"
    );
    Ok(Some(summary))
}

/// Direct (teacher-driven) enrollment, maintained on both sides of the
/// membership. `false` when the class is missing, the target is missing or
/// not a student, or the student was already on the roster.
pub fn add_student_to_class(
    store: &Store,
    class_id: &str,
    student_id: &str,
) -> Result<bool, StoreError> {
    let Some(target) = users::find_by_id(store, student_id)? else {
        return Ok(false);
    };
    if target.role != UserRole::Student {
        return Ok(false);
    }
    let newly_added = classes::add_student(store, class_id, student_id)?.unwrap_or(false);
    if newly_added {
        users::add_class_membership(store, student_id, class_id)?;
    }
    Ok(newly_added)
}

/// Teacher removing a student from one class roster. Membership is dropped on
/// both sides; `false` when the student was not on the roster.
pub fn remove_student_from_class(
    store: &Store,
    class_id: &str,
    student_id: &str,
) -> Result<bool, StoreError> {
    let removed = classes::remove_student(store, class_id, student_id)?;
    users::remove_class_membership(store, student_id, class_id)?;
    Ok(removed)
}

/// The roster as password-stripped users, in stored order.
pub fn students_by_class(
    store: &Store,
    class_id: &str,
) -> Result<Vec<UserResponse>, StoreError> {
    let Some(class) = classes::find_by_id(store, class_id)? else {
        return Ok(Vec::new());
    };
    let mut roster = Vec::with_capacity(class.student_ids.len());
    for student_id in &class.student_ids {
        if let Some(student) = users::find_by_id(store, student_id)? {
            roster.push(UserResponse::from_db(student));
        }
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::OrganizationStatus;
    use crate::test_support;

    #[test]
    fn join_class_enforces_code_and_organization() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let other = test_support::insert_organization(&store, "Shadewell", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@bw.test", Some(&org.id));
        let outsider = test_support::insert_user(&store, UserRole::Student, "s@sw.test", Some(&other.id));
        let class = test_support::insert_class(&store, &teacher, "Science");

        let outcome = join_class(&store, &student.id, "NOPE-0000").expect("join");
        assert_eq!(outcome.error.as_deref(), Some("Invalid or archived class code."));

        let outcome = join_class(&store, &outsider.id, &class.code).expect("join");
        assert_eq!(
            outcome.error.as_deref(),
            Some("This class code belongs to a different organization.")
        );

        let outcome = join_class(&store, "ghost", &class.code).expect("join");
        assert_eq!(outcome.error.as_deref(), Some("Your user profile could not be found."));

        let outcome = join_class(&store, &student.id, &class.code.to_lowercase()).expect("join");
        let joined = outcome.class.expect("joined class");
        assert!(joined.student_ids.contains(&student.id));
        let student = users::find_by_id(&store, &student.id).expect("student").expect("student");
        assert!(student.class_ids.contains(&class.id));
    }

    #[test]
    fn rejoining_does_not_renotify_the_teacher() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@bw.test", Some(&org.id));
        let class = test_support::insert_class(&store, &teacher, "Science");

        join_class(&store, &student.id, &class.code).expect("join");
        join_class(&store, &student.id, &class.code).expect("join again");

        let inbox = notifications::for_user(&store, &teacher.id).expect("inbox");
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].title, "New Student Joined Class");

        let roster = classes::find_by_id(&store, &class.id).expect("class").expect("class");
        assert_eq!(roster.student_ids.len(), 1);
    }

    #[test]
    fn archived_classes_are_not_joinable() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@bw.test", Some(&org.id));
        let class = test_support::insert_class(&store, &teacher, "Science");
        crate::services::classes::set_archived(&store, &class.id, true).expect("archive");

        let outcome = join_class(&store, &student.id, &class.code).expect("join");
        assert_eq!(outcome.error.as_deref(), Some("Invalid or archived class code."));
    }

    #[test]
    fn roster_import_mixes_created_enrolled_and_failed_rows() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let other = test_support::insert_organization(&store, "Shadewell", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let existing = test_support::insert_user(&store, UserRole::Student, "known@bw.test", Some(&org.id));
        test_support::insert_user(&store, UserRole::Student, "away@sw.test", Some(&other.id));
        let class = test_support::insert_class(&store, &teacher, "Science");

        let row = |email: &str| RosterRow {
            email: email.to_string(),
            first_name: "Sam".to_string(),
            middle_name: String::new(),
            last_name: "Rivera".to_string(),
        };
        let summary = import_roster(
            &store,
            &class.id,
            vec![
                row("known@bw.test"),
                row("new@bw.test"),
                row("away@sw.test"),
                row("t@bw.test"),
                RosterRow { email: "not-an-email".to_string(), ..row("x") },
            ],
        )
        .expect("import")
        .expect("summary");

        assert_eq!(summary.added, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.errors.len(), 3);
        assert!(summary
            .errors
            .iter()
            .any(|e| e == "Student away@sw.test belongs to a different organization."));
        assert!(summary.errors.iter().any(|e| e == "User with email t@bw.test is not a student."));

        let created = users::find_by_email_ci(&store, "new@bw.test").expect("lookup").expect("user");
        assert_eq!(created.role, UserRole::Student);
        assert_eq!(created.organization_id.as_deref(), Some(org.id.as_str()));

        let roster = classes::find_by_id(&store, &class.id).expect("class").expect("class");
        assert!(roster.student_ids.contains(&existing.id));
        assert!(roster.student_ids.contains(&created.id));
    }

    #[test]
    fn direct_add_and_remove_maintain_both_sides_of_the_membership() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@bw.test", Some(&org.id));
        let class = test_support::insert_class(&store, &teacher, "Science");

        assert!(add_student_to_class(&store, &class.id, &student.id).expect("add"));
        assert!(!add_student_to_class(&store, &class.id, &student.id).expect("add again"));
        assert!(!add_student_to_class(&store, &class.id, "ghost").expect("add ghost"));
        assert!(!add_student_to_class(&store, &class.id, &teacher.id).expect("add teacher"));

        let roster = students_by_class(&store, &class.id).expect("roster");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, student.id);

        assert!(remove_student_from_class(&store, &class.id, &student.id).expect("remove"));
        assert!(!remove_student_from_class(&store, &class.id, &student.id).expect("remove again"));
        let refreshed = classes::find_by_id(&store, &class.id).expect("class").expect("class");
        assert!(refreshed.student_ids.is_empty());
        let student = users::find_by_id(&store, &student.id).expect("student").expect("student");
        assert!(student.class_ids.is_empty());
    }
}
