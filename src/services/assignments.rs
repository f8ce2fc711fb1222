use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::models::Assignment;
use crate::repositories::{assignments, classes, notifications, quizzes, users};
use crate::schemas::quiz::StudentQuiz;
use crate::store::{Store, StoreError};

/// Makes a quiz available to a class. `None` when the quiz or class is
/// missing, their organizations differ, or the pair is already assigned; on
/// success every student in the class and the org admin are notified.
pub fn assign_quiz_to_class(
    store: &Store,
    quiz_id: &str,
    class_id: &str,
    available_from: OffsetDateTime,
) -> Result<Option<Assignment>, StoreError> {
    let quiz = quizzes::find_by_id(store, quiz_id)?;
    let class = classes::find_by_id(store, class_id)?;
    let (Some(quiz), Some(class)) = (quiz, class) else {
        tracing::warn!(quiz_id, class_id, "Assignment rejected: quiz or class not found");
        return Ok(None);
    };
    if quiz.organization_id != class.organization_id {
        tracing::warn!(quiz_id, class_id, "Assignment rejected: organizations differ");
        return Ok(None);
    }
    if assignments::find_pair(store, quiz_id, class_id)?.is_some() {
        return Ok(None);
    }

    let assignment = Assignment {
        id: Uuid::new_v4().to_string(),
        quiz_id: quiz_id.to_string(),
        class_id: class_id.to_string(),
        available_from,
    };
    assignments::insert(store, assignment.clone())?;

    for student_id in &class.student_ids {
        notifications::create(
            store,
            notifications::NewNotification {
                user_id: student_id,
                title: "New Quiz Assigned!",
                message: format!(
                    "A new quiz, \"{}\", has been assigned to your class \"{}\".",
                    quiz.title, class.name
                ),
                link: Some("/student"),
            },
        )?;
    }

    if let Some(admin) = users::find_org_admin(store, &quiz.organization_id)? {
        if let Some(teacher) = users::find_by_id(store, &quiz.teacher_id)? {
            notifications::create(
                store,
                notifications::NewNotification {
                    user_id: &admin.id,
                    title: "New Quiz Assigned",
                    message: format!(
                        "{} assigned \"{}\" to \"{}\".",
                        teacher.full_name(),
                        quiz.title,
                        class.name
                    ),
                    link: Some("/admin"),
                },
            )?;
        }
    }

    tracing::info!(assignment_id = %assignment.id, quiz_id, class_id, "Quiz assigned to class");
    Ok(Some(assignment))
}

/// The student's dashboard feed: assignments for their classes joined to
/// active quizzes of their organization.
pub fn quizzes_for_student(store: &Store, student_id: &str) -> Result<Vec<StudentQuiz>, StoreError> {
    let Some(student) = users::find_by_id(store, student_id)? else {
        return Ok(Vec::new());
    };
    let Some(organization_id) = student.organization_id else {
        return Ok(Vec::new());
    };
    if student.class_ids.is_empty() {
        return Ok(Vec::new());
    }

    let all_quizzes = quizzes::list_all(store)?;
    let feed = assignments::list_all(store)?
        .into_iter()
        .filter(|assignment| student.class_ids.contains(&assignment.class_id))
        .filter_map(|assignment| {
            let quiz = all_quizzes.iter().find(|quiz| {
                quiz.id == assignment.quiz_id
                    && quiz.state.is_active()
                    && quiz.organization_id == organization_id
            })?;
            Some(StudentQuiz { quiz: quiz.clone(), assignment })
        })
        .collect();
    Ok(feed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::{OrganizationStatus, UserRole};
    use crate::services::quizzes as quiz_service;
    use crate::test_support;

    #[test]
    fn cross_organization_assignment_is_rejected_without_side_effects() {
        let store = test_support::store();
        let org_a = test_support::insert_organization(&store, "Alpha", OrganizationStatus::Approved);
        let org_b = test_support::insert_organization(&store, "Beta", OrganizationStatus::Approved);
        let teacher_a = test_support::insert_user(&store, UserRole::Teacher, "t@a.test", Some(&org_a.id));
        let teacher_b = test_support::insert_user(&store, UserRole::Teacher, "t@b.test", Some(&org_b.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@b.test", Some(&org_b.id));
        let class = test_support::insert_class(&store, &teacher_b, "Beta Class");
        test_support::enroll(&store, &class, &student);
        let quiz = test_support::insert_quiz(&store, &teacher_a, "Alpha Quiz");

        let outcome = assign_quiz_to_class(&store, &quiz.id, &class.id, test_support::past())
            .expect("assign");
        assert!(outcome.is_none());
        assert!(assignments::list_by_class(&store, &class.id).expect("assignments").is_empty());
        assert!(notifications::for_user(&store, &student.id).expect("inbox").is_empty());
    }

    #[test]
    fn duplicate_assignment_for_the_same_pair_is_rejected() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let class = test_support::insert_class(&store, &teacher, "Science");
        let quiz = test_support::insert_quiz(&store, &teacher, "Fractions");

        let first = assign_quiz_to_class(&store, &quiz.id, &class.id, test_support::past())
            .expect("assign");
        assert!(first.is_some());
        let second = assign_quiz_to_class(&store, &quiz.id, &class.id, test_support::past())
            .expect("assign");
        assert!(second.is_none());
        assert_eq!(assignments::list_by_quiz(&store, &quiz.id).expect("assignments").len(), 1);
    }

    #[test]
    fn assignment_notifies_roster_and_admin() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let admin = test_support::insert_user(&store, UserRole::Admin, "a@bw.test", Some(&org.id));
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@bw.test", Some(&org.id));
        let class = test_support::insert_class(&store, &teacher, "Science");
        test_support::enroll(&store, &class, &student);
        let quiz = test_support::insert_quiz(&store, &teacher, "Fractions");

        assign_quiz_to_class(&store, &quiz.id, &class.id, test_support::past())
            .expect("assign")
            .expect("assignment");

        let student_inbox = notifications::for_user(&store, &student.id).expect("inbox");
        assert_eq!(student_inbox.len(), 1);
        assert_eq!(student_inbox[0].title, "New Quiz Assigned!");

        let admin_titles: Vec<String> = notifications::for_user(&store, &admin.id)
            .expect("inbox")
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert!(admin_titles.contains(&"New Quiz Assigned".to_string()));
    }

    #[test]
    fn student_feed_skips_archived_and_deleted_quizzes() {
        let store = test_support::store();
        let org = test_support::insert_organization(&store, "Brightwood", OrganizationStatus::Approved);
        let teacher = test_support::insert_user(&store, UserRole::Teacher, "t@bw.test", Some(&org.id));
        let student = test_support::insert_user(&store, UserRole::Student, "s@bw.test", Some(&org.id));
        let class = test_support::insert_class(&store, &teacher, "Science");
        test_support::enroll(&store, &class, &student);
        let visible = test_support::insert_quiz(&store, &teacher, "Visible");
        let archived = test_support::insert_quiz(&store, &teacher, "Archived");

        assign_quiz_to_class(&store, &visible.id, &class.id, test_support::past())
            .expect("assign")
            .expect("assignment");
        assign_quiz_to_class(&store, &archived.id, &class.id, test_support::past())
            .expect("assign")
            .expect("assignment");
        quiz_service::set_archived(&store, &archived.id, true).expect("archive");

        let feed = quizzes_for_student(&store, &student.id).expect("feed");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].quiz.id, visible.id);
    }
}
