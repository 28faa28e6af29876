use async_trait::async_trait;

use crate::admin::application::domain::analytics::{
    course_stats, dashboard_totals, enrich_enrollments, RECENT_ENROLLMENTS,
};
use crate::admin::application::ports::incoming::use_cases::{
    DashboardReport, GetDashboardError, GetDashboardUseCase,
};
use crate::admin::application::ports::outgoing::AdminQuery;

pub struct GetDashboardService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> GetDashboardService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDashboardUseCase for GetDashboardService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardReport, GetDashboardError> {
        let users = self.query.list_users().await?;
        let courses = self.query.list_courses().await?;
        let enrollments = self.query.list_enrollments().await?;

        let stats = course_stats(&courses, &enrollments);
        let totals = dashboard_totals(&users, &courses, &enrollments, &stats);

        let recent: Vec<_> = enrollments.into_iter().take(RECENT_ENROLLMENTS).collect();
        let recent_enrollments = enrich_enrollments(recent, &users, &courses);

        Ok(DashboardReport {
            totals,
            recent_enrollments,
            course_stats: stats,
        })
    }
}
