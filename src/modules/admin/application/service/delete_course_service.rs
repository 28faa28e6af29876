use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    DeleteCourseError, DeleteCourseUseCase,
};
use crate::course::application::ports::outgoing::CourseRepository;

pub struct DeleteCourseService<R>
where
    R: CourseRepository,
{
    repo: R,
}

impl<R> DeleteCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteCourseUseCase for DeleteCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError> {
        match self.repo.delete_course(course_id).await {
            Ok(()) => {
                info!(%course_id, "Course deleted");
                Ok(())
            }
            Err(err) => {
                let err = DeleteCourseError::from(err);
                if let DeleteCourseError::HasEnrollments(count) = err {
                    warn!(%course_id, count, "Refusing to delete course with enrollments");
                }
                Err(err)
            }
        }
    }
}
