use async_trait::async_trait;

use crate::admin::application::domain::analytics::EnrichedEnrollment;
use crate::admin::application::ports::outgoing::AdminQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListEnrollmentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AdminQueryError> for ListEnrollmentsError {
    fn from(err: AdminQueryError) -> Self {
        ListEnrollmentsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListEnrollmentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EnrichedEnrollment>, ListEnrollmentsError>;
}
