use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::course::application::domain::entities::Lesson;
use crate::course::application::ports::outgoing::CourseQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetLessonError {
    #[error("course not found")]
    CourseNotFound,

    #[error("lesson not found")]
    LessonNotFound,

    #[error("access denied, enrollment required")]
    AccessDenied,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseQueryError> for GetLessonError {
    fn from(err: CourseQueryError) -> Self {
        GetLessonError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetLessonUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        viewer: &User,
    ) -> Result<Lesson, GetLessonError>;
}
