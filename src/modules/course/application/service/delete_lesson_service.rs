use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::course::application::ports::incoming::use_cases::{
    DeleteLessonError, DeleteLessonUseCase,
};
use crate::course::application::ports::outgoing::CourseRepository;

pub struct DeleteLessonService<R>
where
    R: CourseRepository,
{
    repo: R,
}

impl<R> DeleteLessonService<R>
where
    R: CourseRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteLessonUseCase for DeleteLessonService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid, lesson_id: Uuid) -> Result<(), DeleteLessonError> {
        self.repo.delete_lesson(course_id, lesson_id).await?;

        info!(course_id = %course_id, lesson_id = %lesson_id, "Lesson deleted");
        Ok(())
    }
}
