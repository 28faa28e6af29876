use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::{Course, CourseType};
use crate::course::application::ports::outgoing::{
    CourseChanges, CourseRepositoryError, NewCourse,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw course fields as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub instructor_name: String,
    pub course_type: String,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Validated course fields, shared by course creation and admin edits.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCommand {
    title: String,
    description: String,
    instructor_name: String,
    course_type: CourseType,
    price: Option<f64>,
    thumbnail_url: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CourseCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Instructor name cannot be empty")]
    EmptyInstructorName,

    #[error("Invalid course type: must be 'free' or 'paid'")]
    InvalidCourseType,

    #[error("Price is required for paid courses")]
    MissingPrice,

    #[error("Price must be a positive number")]
    InvalidPrice,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl CourseCommand {
    pub fn new(fields: CourseFields) -> Result<Self, CourseCommandError> {
        let title = fields.title.trim().to_string();
        if title.is_empty() {
            return Err(CourseCommandError::EmptyTitle);
        }

        let description = fields.description.trim().to_string();
        if description.is_empty() {
            return Err(CourseCommandError::EmptyDescription);
        }

        let instructor_name = fields.instructor_name.trim().to_string();
        if instructor_name.is_empty() {
            return Err(CourseCommandError::EmptyInstructorName);
        }

        let course_type = fields
            .course_type
            .parse::<CourseType>()
            .map_err(|_| CourseCommandError::InvalidCourseType)?;

        let price = match course_type {
            CourseType::Paid => {
                let price = fields.price.ok_or(CourseCommandError::MissingPrice)?;
                if !price.is_finite() || price <= 0.0 {
                    return Err(CourseCommandError::InvalidPrice);
                }
                Some(price)
            }
            // Free courses never carry a price
            CourseType::Free => None,
        };

        let tags = fields
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            title,
            description,
            instructor_name,
            course_type,
            price,
            thumbnail_url: non_empty(fields.thumbnail_url),
            category: non_empty(fields.category),
            tags,
        })
    }

    pub fn course_type(&self) -> CourseType {
        self.course_type
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn into_new_course(self, instructor_id: Uuid) -> NewCourse {
        NewCourse {
            title: self.title,
            description: self.description,
            instructor_name: self.instructor_name,
            instructor_id: Some(instructor_id),
            course_type: self.course_type,
            price: self.price,
            thumbnail_url: self.thumbnail_url,
            category: self.category,
            tags: self.tags,
        }
    }

    pub fn into_changes(self, is_active: Option<bool>) -> CourseChanges {
        CourseChanges {
            title: self.title,
            description: self.description,
            instructor_name: self.instructor_name,
            course_type: self.course_type,
            price: self.price,
            thumbnail_url: self.thumbnail_url,
            category: self.category,
            tags: self.tags,
            is_active,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCourseError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for CreateCourseError {
    fn from(err: CourseRepositoryError) -> Self {
        CreateCourseError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CourseCommand,
        instructor_id: Uuid,
    ) -> Result<Course, CreateCourseError>;
}
