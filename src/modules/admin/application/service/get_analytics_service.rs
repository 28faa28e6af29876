use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::admin::application::domain::analytics::{
    course_stats, monthly_trends, top_courses, type_distribution, TOP_COURSES, TREND_MONTHS,
};
use crate::admin::application::ports::incoming::use_cases::{
    AnalyticsReport, GetAnalyticsError, GetAnalyticsUseCase,
};
use crate::admin::application::ports::outgoing::AdminQuery;

pub struct GetAnalyticsService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> GetAnalyticsService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn report_at(&self, now: DateTime<Utc>) -> Result<AnalyticsReport, GetAnalyticsError> {
        let courses = self.query.list_courses().await?;
        let enrollments = self.query.list_enrollments().await?;

        Ok(AnalyticsReport {
            monthly_trends: monthly_trends(&enrollments, now, TREND_MONTHS),
            course_type_distribution: type_distribution(&courses),
            top_courses: top_courses(course_stats(&courses, &enrollments), TOP_COURSES),
        })
    }
}

#[async_trait]
impl<Q> GetAnalyticsUseCase for GetAnalyticsService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<AnalyticsReport, GetAnalyticsError> {
        self.report_at(Utc::now()).await
    }
}
