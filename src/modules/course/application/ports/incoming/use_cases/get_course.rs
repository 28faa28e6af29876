use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::course::application::domain::entities::Course;
use crate::course::application::ports::outgoing::CourseQueryError;

/// A course as seen by one viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail {
    pub course: Course,
    pub is_enrolled: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCourseError {
    #[error("course not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseQueryError> for GetCourseError {
    fn from(err: CourseQueryError) -> Self {
        GetCourseError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid, viewer: &User)
        -> Result<CourseDetail, GetCourseError>;
}
