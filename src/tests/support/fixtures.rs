use chrono::Utc;
use sea_orm::prelude::Json;
use serde_json::json;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
use crate::auth::application::domain::entities::{User, UserRole};
use crate::course::adapter::outgoing::sea_orm_entity::courses::Model as CourseModel;
use crate::course::adapter::outgoing::sea_orm_entity::enrollments::Model as EnrollmentModel;
use crate::course::application::domain::entities::{
    Course, CourseType, Enrollment, PaymentStatus, VideoType,
};
use crate::course::application::domain::lessons::LessonDraft;

pub const SAMPLE_PRICE: f64 = 1500.0;

/// A fresh active user. Every call yields a new id and email.
pub fn sample_user(role: UserRole) -> User {
    let id = Uuid::new_v4();
    let now = Utc::now();
    User {
        id,
        full_name: format!("{} {}", role, &id.simple().to_string()[..8]),
        email: format!("{}@example.com", id.simple()),
        password_hash: "hashed:password".to_string(),
        role,
        phone: None,
        enrolled_courses: vec![],
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// A fresh active course without lessons. Paid courses cost `SAMPLE_PRICE`.
pub fn sample_course(course_type: CourseType) -> Course {
    let id = Uuid::new_v4();
    let now = Utc::now();
    Course {
        id,
        title: format!("Course {}", &id.simple().to_string()[..8]),
        description: "Learn something useful".to_string(),
        instructor_name: "Jane Doe".to_string(),
        instructor_id: None,
        course_type,
        price: match course_type {
            CourseType::Paid => Some(SAMPLE_PRICE),
            CourseType::Free => None,
        },
        thumbnail_url: None,
        category: Some("programming".to_string()),
        tags: vec!["rust".to_string()],
        lessons: vec![],
        total_duration: None,
        student_count: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_lesson_draft() -> LessonDraft {
    LessonDraft {
        title: "Ownership".to_string(),
        description: "Moves and borrows".to_string(),
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        video_type: VideoType::Youtube,
        duration: Some(12),
        is_preview: false,
        resources: vec![],
    }
}

pub fn sample_enrollment(user_id: Uuid, course_id: Uuid, status: PaymentStatus) -> Enrollment {
    Enrollment {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        enrolled_at: Utc::now(),
        payment_status: status,
        transaction_id: None,
        progress: 0.0,
        completed_lessons: vec![],
    }
}

//
// ──────────────────────────────────────────────────────────
// Database rows
// ──────────────────────────────────────────────────────────
//

pub fn user_model(id: Uuid, role: &str) -> UserModel {
    let now = Utc::now().fixed_offset();
    UserModel {
        id,
        full_name: "Test User".to_string(),
        email: format!("{}@example.com", id.simple()),
        password_hash: "hashed:password".to_string(),
        role: role.to_string(),
        phone: None,
        enrolled_courses: json!([]),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn course_model(id: Uuid, course_type: &str) -> CourseModel {
    let now = Utc::now().fixed_offset();
    CourseModel {
        id,
        title: "Rust for Beginners".to_string(),
        description: "From zero to crates.io".to_string(),
        instructor_name: "Jane Doe".to_string(),
        instructor_id: None,
        course_type: course_type.to_string(),
        price: (course_type == "paid").then_some(SAMPLE_PRICE),
        thumbnail_url: None,
        category: None,
        tags: Json::Array(vec![]),
        lessons: Json::Array(vec![]),
        total_duration: None,
        student_count: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn enrollment_model(user_id: Uuid, course_id: Uuid, status: &str) -> EnrollmentModel {
    EnrollmentModel {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        enrolled_at: Utc::now().fixed_offset(),
        payment_status: status.to_string(),
        transaction_id: None,
        progress: 0.0,
        completed_lessons: json!([]),
    }
}
