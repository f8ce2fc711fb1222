use std::collections::HashMap;
use std::sync::Once;

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::core::time::now_utc;
use crate::db::models::{Class, Organization, Quiz, QuestionBody, User};
use crate::db::types::{ContentState, OrganizationStatus, UserRole};
use crate::repositories::{classes, organizations, quizzes, users};
use crate::schemas::quiz::NewQuestion;
use crate::services::join_codes;
use crate::store::Store;

static TRACING: Once = Once::new();

/// Fresh in-memory store with test logging wired up once per process.
pub(crate) fn store() -> Store {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
    Store::in_memory()
}

pub(crate) fn insert_super_admin(store: &Store) -> User {
    insert_user(store, UserRole::SuperAdmin, "super@test.example", None)
}

pub(crate) fn insert_organization(
    store: &Store,
    name: &str,
    status: OrganizationStatus,
) -> Organization {
    let organization = Organization {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        code: join_codes::organization_code(name),
        status,
        website: String::new(),
        mobile: String::new(),
        address: String::new(),
        country: String::new(),
    };
    organizations::insert(store, organization.clone()).expect("insert organization");
    organization
}

/// Password is always `"password"`; the first name is taken from the email's
/// local part so notification messages stay readable.
pub(crate) fn insert_user(
    store: &Store,
    role: UserRole,
    email: &str,
    organization_id: Option<&str>,
) -> User {
    let first_name = email.split('@').next().unwrap_or("test").to_string();
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        password: "password".to_string(),
        role,
        first_name,
        middle_name: String::new(),
        last_name: "Tester".to_string(),
        organization_id: organization_id.map(str::to_string),
        class_ids: Vec::new(),
        points: 0,
        last_activity: None,
    };
    users::insert(store, user.clone()).expect("insert user");
    user
}

pub(crate) fn insert_class(store: &Store, teacher: &User, name: &str) -> Class {
    let class = Class {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        teacher_id: teacher.id.clone(),
        organization_id: teacher.organization_id.clone().expect("teacher organization"),
        code: join_codes::class_code(name),
        student_ids: Vec::new(),
        state: ContentState::Active,
    };
    classes::insert(store, class.clone()).expect("insert class");
    class
}

pub(crate) fn insert_quiz(store: &Store, teacher: &User, title: &str) -> Quiz {
    let quiz = Quiz {
        id: Uuid::new_v4().to_string(),
        teacher_id: teacher.id.clone(),
        organization_id: teacher.organization_id.clone().expect("teacher organization"),
        title: title.to_string(),
        questions: vec![choice_question("Placeholder question?", 0).into_question(
            Uuid::new_v4().to_string(),
        )],
        state: ContentState::Active,
    };
    quizzes::insert(store, quiz.clone()).expect("insert quiz");
    quiz
}

/// Enrolls on both sides of the membership, like a successful class join.
pub(crate) fn enroll(store: &Store, class: &Class, student: &User) {
    classes::add_student(store, &class.id, &student.id).expect("add student");
    users::add_class_membership(store, &student.id, &class.id).expect("add membership");
}

pub(crate) fn past() -> OffsetDateTime {
    now_utc() - Duration::hours(1)
}

pub(crate) fn choice_question(text: &str, correct_answer_index: usize) -> NewQuestion {
    NewQuestion {
        question_text: text.to_string(),
        body: QuestionBody::MultipleChoice {
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answer_index,
        },
    }
}

pub(crate) fn true_false_question(text: &str, correct_answer: bool) -> NewQuestion {
    NewQuestion {
        question_text: text.to_string(),
        body: QuestionBody::TrueFalse { correct_answer },
    }
}

pub(crate) fn drag_and_drop_question(
    text: &str,
    items: &[&str],
    targets: &[&str],
    correct_mapping: &[(usize, usize)],
) -> NewQuestion {
    NewQuestion {
        question_text: text.to_string(),
        body: QuestionBody::DragAndDrop {
            items: items.iter().map(|item| item.to_string()).collect(),
            targets: targets.iter().map(|target| target.to_string()).collect(),
            correct_mapping: correct_mapping
                .iter()
                .map(|(item, target)| (item.to_string(), *target))
                .collect::<HashMap<_, _>>(),
        },
    }
}
