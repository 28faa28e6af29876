use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::course::application::ports::outgoing::{CourseQueryError, EnrollmentRepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentOutcome {
    /// Free course: access granted immediately.
    Enrolled { enrollment_id: Uuid },
    /// Paid course: a pending enrollment awaits payment of `amount`.
    PaymentRequired { enrollment_id: Uuid, amount: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnrollInCourseError {
    #[error("course not found")]
    CourseNotFound,

    #[error("already enrolled in this course")]
    AlreadyEnrolled,

    #[error("paid course has no price")]
    MissingPrice,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseQueryError> for EnrollInCourseError {
    fn from(err: CourseQueryError) -> Self {
        EnrollInCourseError::RepositoryError(err.to_string())
    }
}

impl From<EnrollmentRepositoryError> for EnrollInCourseError {
    fn from(err: EnrollmentRepositoryError) -> Self {
        match err {
            EnrollmentRepositoryError::AlreadyEnrolled => EnrollInCourseError::AlreadyEnrolled,
            EnrollmentRepositoryError::CourseNotFound => EnrollInCourseError::CourseNotFound,
            other => EnrollInCourseError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait EnrollInCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        user: &User,
    ) -> Result<EnrollmentOutcome, EnrollInCourseError>;
}
