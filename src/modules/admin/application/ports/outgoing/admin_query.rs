use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::course::application::domain::entities::{Course, Enrollment};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Whole-collection reads backing the admin views. Every list is newest first.
#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, AdminQueryError>;
    /// Active and inactive courses alike.
    async fn list_courses(&self) -> Result<Vec<Course>, AdminQueryError>;
    /// Every enrollment regardless of payment status, by `enrolled_at`.
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AdminQueryError>;
}
