use async_trait::async_trait;

use crate::admin::application::ports::outgoing::AdminQueryError;
use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AdminQueryError> for ListUsersError {
    fn from(err: AdminQueryError) -> Self {
        ListUsersError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError>;
}
