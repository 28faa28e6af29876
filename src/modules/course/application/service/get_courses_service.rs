use async_trait::async_trait;

use crate::course::application::domain::entities::Course;
use crate::course::application::domain::lessons::restrict_lessons;
use crate::course::application::ports::incoming::use_cases::{GetCoursesError, GetCoursesUseCase};
use crate::course::application::ports::outgoing::CourseQuery;

pub struct GetCoursesService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetCoursesService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCoursesUseCase for GetCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Course>, GetCoursesError> {
        let courses = self.query.list_active().await?;

        // The catalogue is anonymous, so nobody counts as enrolled here
        Ok(courses
            .into_iter()
            .map(|course| restrict_lessons(course, false))
            .collect())
    }
}
