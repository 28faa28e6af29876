use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::Enrollment;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnrollmentRepositoryError {
    #[error("Already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Course not found")]
    CourseNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// In one transaction: appends the course to the user's enrolled list,
    /// bumps the course's student count and records a completed enrollment.
    async fn enroll_free(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError>;

    /// Records a pending enrollment, or returns the one already pending for
    /// this user and course.
    async fn begin_paid_enrollment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError>;
}
