use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::courses::{Column, Entity as CourseEntity, Model as CourseModel};
use crate::course::application::domain::entities::Course;
use crate::course::application::ports::outgoing::{CourseQuery, CourseQueryError};

#[derive(Clone, Debug)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CourseQueryError {
    CourseQueryError::DatabaseError(e.to_string())
}

fn to_courses(models: Vec<CourseModel>) -> Result<Vec<Course>, CourseQueryError> {
    models
        .into_iter()
        .map(|m| m.into_domain().map_err(CourseQueryError::SerializationError))
        .collect()
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn list_active(&self) -> Result<Vec<Course>, CourseQueryError> {
        let models = CourseEntity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_courses(models)
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseQueryError> {
        let models = CourseEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_courses(models)
    }

    async fn find_by_id(&self, course_id: Uuid) -> Result<Option<Course>, CourseQueryError> {
        CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.into_domain().map_err(CourseQueryError::SerializationError))
            .transpose()
    }
}
