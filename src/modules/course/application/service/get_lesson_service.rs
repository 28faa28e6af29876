use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::course::application::domain::entities::Lesson;
use crate::course::application::domain::lessons::can_view_lesson;
use crate::course::application::ports::incoming::use_cases::{GetLessonError, GetLessonUseCase};
use crate::course::application::ports::outgoing::CourseQuery;

pub struct GetLessonService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetLessonService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetLessonUseCase for GetLessonService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        viewer: &User,
    ) -> Result<Lesson, GetLessonError> {
        let course = self
            .query
            .find_by_id(course_id)
            .await?
            .filter(|c| c.is_active)
            .ok_or(GetLessonError::CourseNotFound)?;

        let lesson = course
            .find_lesson(lesson_id)
            .ok_or(GetLessonError::LessonNotFound)?;

        if !can_view_lesson(&course, lesson, viewer.is_enrolled_in(course.id)) {
            warn!(user_id = %viewer.id, course_id = %course_id, "Lesson requires enrollment");
            return Err(GetLessonError::AccessDenied);
        }

        Ok(lesson.clone())
    }
}
