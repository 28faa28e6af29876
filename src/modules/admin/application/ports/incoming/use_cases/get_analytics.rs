use async_trait::async_trait;

use crate::admin::application::domain::analytics::{CourseStats, MonthlyTrend, TypeDistribution};
use crate::admin::application::ports::outgoing::AdminQueryError;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub monthly_trends: Vec<MonthlyTrend>,
    pub course_type_distribution: TypeDistribution,
    pub top_courses: Vec<CourseStats>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetAnalyticsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AdminQueryError> for GetAnalyticsError {
    fn from(err: AdminQueryError) -> Self {
        GetAnalyticsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetAnalyticsUseCase: Send + Sync {
    async fn execute(&self) -> Result<AnalyticsReport, GetAnalyticsError>;
}
