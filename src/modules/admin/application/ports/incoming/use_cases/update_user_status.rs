use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::domain::role_policy::PolicyViolation;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQueryError, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserStatusError {
    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for UpdateUserStatusError {
    fn from(err: UserQueryError) -> Self {
        UpdateUserStatusError::RepositoryError(err.to_string())
    }
}

impl From<UserRepositoryError> for UpdateUserStatusError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => UpdateUserStatusError::UserNotFound,
            other => UpdateUserStatusError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateUserStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &User,
        target_id: Uuid,
        is_active: bool,
    ) -> Result<User, UpdateUserStatusError>;
}
