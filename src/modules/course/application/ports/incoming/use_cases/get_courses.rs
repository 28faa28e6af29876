use async_trait::async_trait;

use crate::course::application::domain::entities::Course;
use crate::course::application::ports::outgoing::CourseQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCoursesError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseQueryError> for GetCoursesError {
    fn from(err: CourseQueryError) -> Self {
        GetCoursesError::RepositoryError(err.to_string())
    }
}

/// Public catalogue. Paid courses only expose their preview lessons.
#[async_trait]
pub trait GetCoursesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Course>, GetCoursesError>;
}
