use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::course::application::domain::entities::CourseType;
use crate::course::application::ports::incoming::use_cases::{
    EnrollInCourseError, EnrollInCourseUseCase, EnrollmentOutcome,
};
use crate::course::application::ports::outgoing::{CourseQuery, EnrollmentRepository};

pub struct EnrollInCourseService<Q, R>
where
    Q: CourseQuery,
    R: EnrollmentRepository,
{
    query: Q,
    repo: R,
}

impl<Q, R> EnrollInCourseService<Q, R>
where
    Q: CourseQuery,
    R: EnrollmentRepository,
{
    pub fn new(query: Q, repo: R) -> Self {
        Self { query, repo }
    }
}

#[async_trait]
impl<Q, R> EnrollInCourseUseCase for EnrollInCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        user: &User,
    ) -> Result<EnrollmentOutcome, EnrollInCourseError> {
        let course = self
            .query
            .find_by_id(course_id)
            .await?
            .filter(|c| c.is_active)
            .ok_or(EnrollInCourseError::CourseNotFound)?;

        if user.is_enrolled_in(course.id) {
            return Err(EnrollInCourseError::AlreadyEnrolled);
        }

        match course.course_type {
            CourseType::Free => {
                let enrollment = self.repo.enroll_free(user.id, course.id).await?;
                info!(user_id = %user.id, course_id = %course.id, "Enrolled in free course");
                Ok(EnrollmentOutcome::Enrolled {
                    enrollment_id: enrollment.id,
                })
            }
            CourseType::Paid => {
                let amount = course.price.ok_or(EnrollInCourseError::MissingPrice)?;
                let enrollment = self.repo.begin_paid_enrollment(user.id, course.id).await?;
                info!(
                    user_id = %user.id,
                    course_id = %course.id,
                    enrollment_id = %enrollment.id,
                    "Paid enrollment pending payment"
                );
                Ok(EnrollmentOutcome::PaymentRequired {
                    enrollment_id: enrollment.id,
                    amount,
                })
            }
        }
    }
}
