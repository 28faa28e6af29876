use async_trait::async_trait;

use crate::admin::application::domain::analytics::{
    CourseStats, DashboardTotals, EnrichedEnrollment,
};
use crate::admin::application::ports::outgoing::AdminQueryError;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub totals: DashboardTotals,
    pub recent_enrollments: Vec<EnrichedEnrollment>,
    pub course_stats: Vec<CourseStats>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AdminQueryError> for GetDashboardError {
    fn from(err: AdminQueryError) -> Self {
        GetDashboardError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardReport, GetDashboardError>;
}
