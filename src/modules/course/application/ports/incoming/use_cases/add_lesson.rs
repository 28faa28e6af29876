use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::{Lesson, VideoType};
use crate::course::application::domain::lessons::LessonDraft;
use crate::course::application::ports::outgoing::CourseRepositoryError;

/// Longest accepted lesson, in minutes.
pub const MAX_LESSON_MINUTES: i32 = 24 * 60;

/// Raw lesson fields as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct LessonFields {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_type: String,
    pub duration: Option<i32>,
    pub is_preview: bool,
    pub resources: Vec<String>,
}

/// Validated lesson content, used for both adding and replacing lessons.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonCommand(LessonDraft);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LessonCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Video URL cannot be empty")]
    EmptyVideoUrl,

    #[error("Invalid video type: must be 'youtube' or 'vimeo'")]
    InvalidVideoType,

    #[error("Duration must be between 0 and 1440 minutes")]
    InvalidDuration,
}

impl LessonCommand {
    pub fn new(fields: LessonFields) -> Result<Self, LessonCommandError> {
        let title = fields.title.trim().to_string();
        if title.is_empty() {
            return Err(LessonCommandError::EmptyTitle);
        }

        let video_url = fields.video_url.trim().to_string();
        if video_url.is_empty() {
            return Err(LessonCommandError::EmptyVideoUrl);
        }

        let video_type = fields
            .video_type
            .parse::<VideoType>()
            .map_err(|_| LessonCommandError::InvalidVideoType)?;

        if matches!(fields.duration, Some(d) if !(0..=MAX_LESSON_MINUTES).contains(&d)) {
            return Err(LessonCommandError::InvalidDuration);
        }

        Ok(Self(LessonDraft {
            title,
            description: fields.description.trim().to_string(),
            video_url,
            video_type,
            duration: fields.duration,
            is_preview: fields.is_preview,
            resources: fields.resources,
        }))
    }

    pub fn into_draft(self) -> LessonDraft {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddLessonError {
    #[error("course not found")]
    CourseNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for AddLessonError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => AddLessonError::CourseNotFound,
            other => AddLessonError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddLessonUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid, command: LessonCommand)
        -> Result<Lesson, AddLessonError>;
}
