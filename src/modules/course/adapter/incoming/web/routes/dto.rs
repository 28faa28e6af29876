use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::course::application::domain::entities::{Course, Lesson};
use crate::course::application::domain::video::embed_url;
use crate::course::application::ports::incoming::use_cases::{CourseFields, LessonFields};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CourseRequestDto {
    #[schema(example = "Rust for Beginners")]
    pub title: String,
    pub description: String,
    #[schema(example = "Jane Doe")]
    pub instructor_name: String,
    /// `free` or `paid`
    #[schema(example = "paid")]
    pub course_type: String,
    /// Required and positive for paid courses
    #[schema(example = 1500.0)]
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CourseRequestDto> for CourseFields {
    fn from(dto: CourseRequestDto) -> Self {
        CourseFields {
            title: dto.title,
            description: dto.description,
            instructor_name: dto.instructor_name,
            course_type: dto.course_type,
            price: dto.price,
            thumbnail_url: dto.thumbnail_url,
            category: dto.category,
            tags: dto.tags,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LessonRequestDto {
    #[schema(example = "Ownership")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub video_url: String,
    /// `youtube` or `vimeo`
    #[schema(example = "youtube")]
    pub video_type: String,
    /// Minutes
    pub duration: Option<i32>,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl From<LessonRequestDto> for LessonFields {
    fn from(dto: LessonRequestDto) -> Self {
        LessonFields {
            title: dto.title,
            description: dto.description,
            video_url: dto.video_url,
            video_type: dto.video_type,
            duration: dto.duration,
            is_preview: dto.is_preview,
            resources: dto.resources,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    #[schema(example = "youtube")]
    pub video_type: String,
    /// Player URL derived from `video_url`
    #[schema(example = "https://www.youtube.com/embed/dQw4w9WgXcQ")]
    pub embed_url: String,
    pub duration: Option<i32>,
    pub order: i32,
    pub is_preview: bool,
    pub resources: Vec<String>,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        LessonResponse {
            embed_url: embed_url(&lesson.video_url, lesson.video_type),
            id: lesson.id,
            title: lesson.title,
            description: lesson.description,
            video_url: lesson.video_url,
            video_type: lesson.video_type.as_str().to_string(),
            duration: lesson.duration,
            order: lesson.order,
            is_preview: lesson.is_preview,
            resources: lesson.resources,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor_name: String,
    pub instructor_id: Option<Uuid>,
    #[schema(example = "paid")]
    pub course_type: String,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub lessons: Vec<LessonResponse>,
    pub total_duration: Option<i32>,
    pub student_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        CourseResponse {
            id: course.id,
            title: course.title,
            description: course.description,
            instructor_name: course.instructor_name,
            instructor_id: course.instructor_id,
            course_type: course.course_type.to_string(),
            price: course.price,
            thumbnail_url: course.thumbnail_url,
            category: course.category,
            tags: course.tags,
            lessons: course.lessons.into_iter().map(LessonResponse::from).collect(),
            total_duration: course.total_duration,
            student_count: course.student_count,
            is_active: course.is_active,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Lesson deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
