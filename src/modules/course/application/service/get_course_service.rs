use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::course::application::domain::lessons::restrict_lessons;
use crate::course::application::ports::incoming::use_cases::{
    CourseDetail, GetCourseError, GetCourseUseCase,
};
use crate::course::application::ports::outgoing::CourseQuery;

pub struct GetCourseService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetCourseService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCourseUseCase for GetCourseService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self, course_id: Uuid, viewer: &User) -> Result<CourseDetail, GetCourseError> {
        let course = self
            .query
            .find_by_id(course_id)
            .await?
            .filter(|c| c.is_active)
            .ok_or(GetCourseError::NotFound)?;

        let is_enrolled = viewer.is_enrolled_in(course.id);

        Ok(CourseDetail {
            course: restrict_lessons(course, is_enrolled),
            is_enrolled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::course::application::domain::entities::{Course, CourseType};
    use crate::course::application::domain::lessons::append_lesson;
    use crate::tests::support::fixtures::{sample_course, sample_lesson_draft, sample_user};
    use crate::tests::support::in_memory::InMemoryCourseStore;
    use crate::tests::support::stubs::FailingStore;

    fn paid_course() -> Course {
        let mut course = sample_course(CourseType::Paid);
        let mut preview = sample_lesson_draft();
        preview.is_preview = true;
        append_lesson(&mut course.lessons, preview);
        append_lesson(&mut course.lessons, sample_lesson_draft());
        course
    }

    #[tokio::test]
    async fn non_enrolled_viewer_sees_previews_only() {
        let course = paid_course();
        let service =
            GetCourseService::new(InMemoryCourseStore::default().with_courses(vec![course.clone()]));
        let viewer = sample_user(UserRole::Student);

        let detail = service.execute(course.id, &viewer).await.unwrap();

        assert!(!detail.is_enrolled);
        assert_eq!(detail.course.lessons.len(), 1);
    }

    #[tokio::test]
    async fn enrolled_viewer_sees_every_lesson() {
        let course = paid_course();
        let service =
            GetCourseService::new(InMemoryCourseStore::default().with_courses(vec![course.clone()]));
        let mut viewer = sample_user(UserRole::Student);
        viewer.enrolled_courses.push(course.id);

        let detail = service.execute(course.id, &viewer).await.unwrap();

        assert!(detail.is_enrolled);
        assert_eq!(detail.course.lessons.len(), 2);
    }

    #[tokio::test]
    async fn inactive_course_is_not_found() {
        let mut course = sample_course(CourseType::Free);
        course.is_active = false;
        let service =
            GetCourseService::new(InMemoryCourseStore::default().with_courses(vec![course.clone()]));

        let result = service
            .execute(course.id, &sample_user(UserRole::Student))
            .await;

        assert_eq!(result.unwrap_err(), GetCourseError::NotFound);
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let service = GetCourseService::new(InMemoryCourseStore::default());

        let result = service
            .execute(Uuid::new_v4(), &sample_user(UserRole::Student))
            .await;

        assert_eq!(result.unwrap_err(), GetCourseError::NotFound);
    }

    #[tokio::test]
    async fn maps_query_failure() {
        let result = GetCourseService::new(FailingStore)
            .execute(Uuid::new_v4(), &sample_user(UserRole::Student))
            .await;

        assert!(matches!(result, Err(GetCourseError::RepositoryError(_))));
    }
}
