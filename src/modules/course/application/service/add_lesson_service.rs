use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::course::application::domain::entities::Lesson;
use crate::course::application::ports::incoming::use_cases::{
    AddLessonError, AddLessonUseCase, LessonCommand,
};
use crate::course::application::ports::outgoing::CourseRepository;

pub struct AddLessonService<R>
where
    R: CourseRepository,
{
    repo: R,
}

impl<R> AddLessonService<R>
where
    R: CourseRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AddLessonUseCase for AddLessonService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        command: LessonCommand,
    ) -> Result<Lesson, AddLessonError> {
        let lesson = self.repo.add_lesson(course_id, command.into_draft()).await?;

        info!(course_id = %course_id, lesson_id = %lesson.id, order = lesson.order, "Lesson added");
        Ok(lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::application::domain::entities::CourseType;
    use crate::course::application::ports::incoming::use_cases::LessonFields;
    use crate::tests::support::fixtures::sample_course;
    use crate::tests::support::in_memory::InMemoryCourseStore;

    fn command(title: &str, duration: i32) -> LessonCommand {
        LessonCommand::new(LessonFields {
            title: title.to_string(),
            description: String::new(),
            video_url: "https://vimeo.com/76979871".to_string(),
            video_type: "vimeo".to_string(),
            duration: Some(duration),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn appends_lessons_in_sequence() {
        let course = sample_course(CourseType::Free);
        let store = InMemoryCourseStore::default().with_courses(vec![course.clone()]);
        let service = AddLessonService::new(store.clone());

        let first = service.execute(course.id, command("Intro", 5)).await.unwrap();
        let second = service.execute(course.id, command("Setup", 7)).await.unwrap();

        assert_eq!(first.order, 1);
        assert_eq!(second.order, 2);

        let stored = store.course(course.id).unwrap();
        assert_eq!(stored.lessons.len(), 2);
        assert_eq!(stored.total_duration, Some(12));
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let service = AddLessonService::new(InMemoryCourseStore::default());

        let result = service.execute(Uuid::new_v4(), command("Intro", 5)).await;

        assert_eq!(result.unwrap_err(), AddLessonError::CourseNotFound);
    }
}
