use async_trait::async_trait;

use crate::admin::application::domain::analytics::course_stats;
use crate::admin::application::ports::incoming::use_cases::{
    AdminCourseSummary, ListCoursesError, ListCoursesUseCase,
};
use crate::admin::application::ports::outgoing::AdminQuery;

pub struct ListCoursesService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> ListCoursesService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCoursesUseCase for ListCoursesService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AdminCourseSummary>, ListCoursesError> {
        let courses = self.query.list_courses().await?;
        let enrollments = self.query.list_enrollments().await?;
        let stats = course_stats(&courses, &enrollments);

        Ok(courses
            .into_iter()
            .zip(stats)
            .map(|(course, stats)| AdminCourseSummary {
                course,
                total_enrollments: stats.enrollments,
                revenue: stats.revenue,
            })
            .collect())
    }
}
