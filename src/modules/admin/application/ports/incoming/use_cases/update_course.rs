use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::Course;
use crate::course::application::ports::incoming::use_cases::CourseCommand;
use crate::course::application::ports::outgoing::CourseRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for UpdateCourseError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => UpdateCourseError::NotFound,
            other => UpdateCourseError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        command: CourseCommand,
        is_active: Option<bool>,
    ) -> Result<Course, UpdateCourseError>;
}
