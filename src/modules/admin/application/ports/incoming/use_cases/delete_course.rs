use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::ports::outgoing::CourseRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Cannot delete course with {0} enrollment(s)")]
    HasEnrollments(u64),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for DeleteCourseError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => DeleteCourseError::NotFound,
            CourseRepositoryError::HasEnrollments(n) => DeleteCourseError::HasEnrollments(n),
            other => DeleteCourseError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError>;
}
