use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::{Course, CourseType, Lesson};
use crate::course::application::domain::lessons::LessonDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor_name: String,
    pub instructor_id: Option<Uuid>,
    pub course_type: CourseType,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Full replacement of a course's editable fields. Lessons and counters are untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseChanges {
    pub title: String,
    pub description: String,
    pub instructor_name: String,
    pub course_type: CourseType,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// `None` keeps the current status
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Course not found")]
    NotFound,

    #[error("Lesson not found")]
    LessonNotFound,

    #[error("Cannot delete course with {0} enrollment(s)")]
    HasEnrollments(u64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create_course(&self, data: NewCourse) -> Result<Course, CourseRepositoryError>;

    async fn update_course(
        &self,
        course_id: Uuid,
        changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError>;

    /// Fails with `HasEnrollments` while any enrollment references the course.
    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError>;

    /// Appends at position `lesson_count + 1`.
    async fn add_lesson(
        &self,
        course_id: Uuid,
        draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError>;

    async fn update_lesson(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError>;

    /// Removes the lesson and renumbers the remaining ones.
    async fn delete_lesson(&self, course_id: Uuid, lesson_id: Uuid)
        -> Result<(), CourseRepositoryError>;
}
