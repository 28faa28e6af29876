use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::course::application::domain::entities::Lesson;
use crate::course::application::ports::incoming::use_cases::{
    LessonCommand, UpdateLessonError, UpdateLessonUseCase,
};
use crate::course::application::ports::outgoing::CourseRepository;

pub struct UpdateLessonService<R>
where
    R: CourseRepository,
{
    repo: R,
}

impl<R> UpdateLessonService<R>
where
    R: CourseRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateLessonUseCase for UpdateLessonService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        command: LessonCommand,
    ) -> Result<Lesson, UpdateLessonError> {
        let lesson = self
            .repo
            .update_lesson(course_id, lesson_id, command.into_draft())
            .await?;

        info!(course_id = %course_id, lesson_id = %lesson_id, "Lesson updated");
        Ok(lesson)
    }
}
