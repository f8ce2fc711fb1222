use std::collections::HashMap;

use crate::core::time::now_utc;
use crate::db::keys;
use crate::db::models::{
    Assignment, Class, Organization, Question, QuestionBody, Quiz, User,
};
use crate::db::types::{ContentState, OrganizationStatus, UserRole};
use crate::services::join_codes;
use crate::store::{Store, StoreError};

/// Populates a fresh store with a small demo tenant: one approved
/// organization with an admin, a teacher, two enrolled students, two assigned
/// quizzes, plus the platform super-admin. A store that already holds
/// an organizations collection is left untouched; returns whether seeding
/// happened.
pub fn ensure_sample_data(store: &Store) -> Result<bool, StoreError> {
    if store.contains(keys::ORGANIZATIONS) {
        return Ok(false);
    }

    let organization = Organization {
        id: "org-brightwood".to_string(),
        name: "Brightwood Academy".to_string(),
        code: join_codes::organization_code("Brightwood Academy"),
        status: OrganizationStatus::Approved,
        website: "https://brightwood.example".to_string(),
        mobile: "+1 555 0100".to_string(),
        address: "1 Academy Lane".to_string(),
        country: "USA".to_string(),
    };

    let user = |id: &str, email: &str, role, first: &str, last: &str, org: Option<&str>| User {
        id: id.to_string(),
        email: email.to_string(),
        password: "password".to_string(),
        role,
        first_name: first.to_string(),
        middle_name: String::new(),
        last_name: last.to_string(),
        organization_id: org.map(str::to_string),
        class_ids: Vec::new(),
        points: 0,
        last_activity: None,
    };
    let mut users = vec![
        user("superadmin-1", "super@gesquiz.example", UserRole::SuperAdmin, "Sonia", "Vale", None),
        user("admin-1", "admin@brightwood.example", UserRole::Admin, "Omar", "Reyes", Some(&organization.id)),
        user("teacher-1", "teacher@brightwood.example", UserRole::Teacher, "Ada", "Byron", Some(&organization.id)),
        user("student-1", "leo@brightwood.example", UserRole::Student, "Leo", "Park", Some(&organization.id)),
        user("student-2", "mina@brightwood.example", UserRole::Student, "Mina", "Okafor", Some(&organization.id)),
    ];

    let class = Class {
        id: "class-1".to_string(),
        name: "Grade 5 Science".to_string(),
        teacher_id: "teacher-1".to_string(),
        organization_id: organization.id.clone(),
        code: join_codes::class_code("Grade 5 Science"),
        student_ids: vec!["student-1".to_string(), "student-2".to_string()],
        state: ContentState::Active,
    };
    for seeded in users.iter_mut().filter(|u| class.student_ids.contains(&u.id)) {
        seeded.class_ids.push(class.id.clone());
    }

    let quiz = |id: &str, title: &str, questions: Vec<Question>| Quiz {
        id: id.to_string(),
        teacher_id: "teacher-1".to_string(),
        organization_id: organization.id.clone(),
        title: title.to_string(),
        questions,
        state: ContentState::Active,
    };
    let water_cycle = quiz(
        "quiz-1",
        "The Water Cycle",
        vec![
            Question {
                id: "question-1".to_string(),
                question_text: "What do we call water turning into vapor?".to_string(),
                body: QuestionBody::MultipleChoice {
                    options: vec![
                        "Condensation".to_string(),
                        "Evaporation".to_string(),
                        "Precipitation".to_string(),
                    ],
                    correct_answer_index: 1,
                },
            },
            Question {
                id: "question-2".to_string(),
                question_text: "Clouds are made of collected water vapor.".to_string(),
                body: QuestionBody::TrueFalse { correct_answer: true },
            },
        ],
    );
    let matching = quiz(
        "quiz-2",
        "Stages of the Water Cycle",
        vec![Question {
            id: "question-3".to_string(),
            question_text: "Match each stage to its description.".to_string(),
            body: QuestionBody::DragAndDrop {
                items: vec!["Evaporation".to_string(), "Condensation".to_string()],
                targets: vec!["Vapor forms clouds".to_string(), "Water becomes vapor".to_string()],
                correct_mapping: HashMap::from([("0".to_string(), 1), ("1".to_string(), 0)]),
            },
        }],
    );

    let assignment = |id: &str, quiz_id: &str| Assignment {
        id: id.to_string(),
        quiz_id: quiz_id.to_string(),
        class_id: class.id.clone(),
        available_from: now_utc(),
    };
    let assignments = vec![assignment("assignment-1", "quiz-1"), assignment("assignment-2", "quiz-2")];

    store.set(keys::ORGANIZATIONS, &[organization])?;
    store.set(keys::USERS, &users)?;
    store.set(keys::CLASSES, &[class])?;
    store.set(keys::QUIZZES, &[water_cycle, matching])?;
    store.set(keys::ASSIGNMENTS, &assignments)?;

    tracing::info!("Seeded sample data");
    Ok(true)
}
