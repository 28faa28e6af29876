use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::domain::role_policy::PolicyViolation;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQueryError, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserRoleError {
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for UpdateUserRoleError {
    fn from(err: UserQueryError) -> Self {
        UpdateUserRoleError::RepositoryError(err.to_string())
    }
}

impl From<UserRepositoryError> for UpdateUserRoleError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => UpdateUserRoleError::UserNotFound,
            other => UpdateUserRoleError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateUserRoleUseCase: Send + Sync {
    /// `role` is the raw requested value and is validated here.
    async fn execute(
        &self,
        actor: &User,
        target_id: Uuid,
        role: &str,
    ) -> Result<User, UpdateUserRoleError>;
}
