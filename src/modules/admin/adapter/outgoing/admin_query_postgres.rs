use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::admin::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::User;
use crate::course::adapter::outgoing::sea_orm_entity::courses::{
    Column as CourseColumn, Entity as CourseEntity,
};
use crate::course::adapter::outgoing::sea_orm_entity::enrollments::{
    Column as EnrollmentColumn, Entity as EnrollmentEntity,
};
use crate::course::application::domain::entities::{Course, Enrollment};

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AdminQueryError {
    AdminQueryError::DatabaseError(e.to_string())
}

fn decode_all<M, T>(
    models: Vec<M>,
    into_domain: impl Fn(M) -> Result<T, String>,
) -> Result<Vec<T>, AdminQueryError> {
    models
        .into_iter()
        .map(|m| into_domain(m).map_err(AdminQueryError::SerializationError))
        .collect()
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn list_users(&self) -> Result<Vec<User>, AdminQueryError> {
        let models = UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_all(models, |m| m.into_domain())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AdminQueryError> {
        let models = CourseEntity::find()
            .order_by_desc(CourseColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_all(models, |m| m.into_domain())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AdminQueryError> {
        let models = EnrollmentEntity::find()
            .order_by_desc(EnrollmentColumn::EnrolledAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_all(models, |m| m.into_domain())
    }
}
