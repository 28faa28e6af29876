use async_trait::async_trait;
use uuid::Uuid;
use crate::course::application::ports::outgoing::CourseRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteLessonError {
    #[error("course not found")]
    CourseNotFound,

    #[error("lesson not found")]
    LessonNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for DeleteLessonError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => DeleteLessonError::CourseNotFound,
            CourseRepositoryError::LessonNotFound => DeleteLessonError::LessonNotFound,
            other => DeleteLessonError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteLessonUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid, lesson_id: Uuid) -> Result<(), DeleteLessonError>;
}
