use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::Course;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    /// Active courses, newest first.
    async fn list_active(&self) -> Result<Vec<Course>, CourseQueryError>;
    /// Every course regardless of status, newest first.
    async fn list_all(&self) -> Result<Vec<Course>, CourseQueryError>;
    async fn find_by_id(&self, course_id: Uuid) -> Result<Option<Course>, CourseQueryError>;
}
