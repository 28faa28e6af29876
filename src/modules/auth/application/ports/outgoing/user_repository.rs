use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User, UserRole};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
    async fn update_role(&self, user_id: Uuid, role: UserRole) -> Result<User, UserRepositoryError>;
    async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<User, UserRepositoryError>;
}
