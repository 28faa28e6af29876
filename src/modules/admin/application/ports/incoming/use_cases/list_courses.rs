use async_trait::async_trait;

use crate::admin::application::ports::outgoing::AdminQueryError;
use crate::course::application::domain::entities::Course;

/// A course with its completed-enrollment figures.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCourseSummary {
    pub course: Course,
    pub total_enrollments: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListCoursesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AdminQueryError> for ListCoursesError {
    fn from(err: AdminQueryError) -> Self {
        ListCoursesError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListCoursesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AdminCourseSummary>, ListCoursesError>;
}
