use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    UpdateCourseError, UpdateCourseUseCase,
};
use crate::course::application::domain::entities::Course;
use crate::course::application::ports::incoming::use_cases::CourseCommand;
use crate::course::application::ports::outgoing::CourseRepository;

pub struct UpdateCourseService<R>
where
    R: CourseRepository,
{
    repo: R,
}

impl<R> UpdateCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateCourseUseCase for UpdateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        command: CourseCommand,
        is_active: Option<bool>,
    ) -> Result<Course, UpdateCourseError> {
        let course = self
            .repo
            .update_course(course_id, command.into_changes(is_active))
            .await?;
        info!(course_id = %course.id, is_active = course.is_active, "Course updated");
        Ok(course)
    }
}
