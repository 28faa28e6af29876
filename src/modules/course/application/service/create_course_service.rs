use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::course::application::domain::entities::Course;
use crate::course::application::ports::incoming::use_cases::{
    CourseCommand, CreateCourseError, CreateCourseUseCase,
};
use crate::course::application::ports::outgoing::CourseRepository;

pub struct CreateCourseService<R>
where
    R: CourseRepository,
{
    repo: R,
}

impl<R> CreateCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateCourseUseCase for CreateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CourseCommand,
        instructor_id: Uuid,
    ) -> Result<Course, CreateCourseError> {
        let course = self
            .repo
            .create_course(command.into_new_course(instructor_id))
            .await?;

        info!(course_id = %course.id, instructor_id = %instructor_id, "Course created");
        Ok(course)
    }
}
