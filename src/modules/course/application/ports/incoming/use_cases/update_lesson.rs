use async_trait::async_trait;
use uuid::Uuid;

use super::add_lesson::LessonCommand;
use crate::course::application::domain::entities::Lesson;
use crate::course::application::ports::outgoing::CourseRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateLessonError {
    #[error("course not found")]
    CourseNotFound,

    #[error("lesson not found")]
    LessonNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for UpdateLessonError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => UpdateLessonError::CourseNotFound,
            CourseRepositoryError::LessonNotFound => UpdateLessonError::LessonNotFound,
            other => UpdateLessonError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateLessonUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        command: LessonCommand,
    ) -> Result<Lesson, UpdateLessonError>;
}
