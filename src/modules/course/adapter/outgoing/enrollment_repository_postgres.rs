use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::sea_orm_entity::courses::{Column as CourseColumn, Entity as CourseEntity};
use super::sea_orm_entity::enrollments::{
    ActiveModel as EnrollmentActiveModel, Column as EnrollmentColumn, Entity as EnrollmentEntity,
    Model as EnrollmentModel,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::course::application::domain::entities::{Enrollment, PaymentStatus};
use crate::course::application::ports::outgoing::{EnrollmentRepository, EnrollmentRepositoryError};

/// Enrollment writes. Each operation runs in a single transaction that holds
/// the enrolling user's row lock, so concurrent requests by the same user
/// are serialized.
#[derive(Clone, Debug)]
pub struct EnrollmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EnrollmentRepositoryError {
    error!("Enrollment store failure: {}", e);
    EnrollmentRepositoryError::DatabaseError(e.to_string())
}

fn to_enrollment(model: EnrollmentModel) -> Result<Enrollment, EnrollmentRepositoryError> {
    model
        .into_domain()
        .map_err(EnrollmentRepositoryError::SerializationError)
}

async fn lock_user(
    txn: &DatabaseTransaction,
    user_id: Uuid,
) -> Result<UserModel, EnrollmentRepositoryError> {
    UserEntity::find_by_id(user_id)
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(map_db_err)?
        .ok_or(EnrollmentRepositoryError::UserNotFound)
}

async fn ensure_course(
    txn: &DatabaseTransaction,
    course_id: Uuid,
) -> Result<(), EnrollmentRepositoryError> {
    CourseEntity::find_by_id(course_id)
        .one(txn)
        .await
        .map_err(map_db_err)?
        .map(|_| ())
        .ok_or(EnrollmentRepositoryError::CourseNotFound)
}

fn new_enrollment(user_id: Uuid, course_id: Uuid, status: PaymentStatus) -> EnrollmentActiveModel {
    EnrollmentActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        course_id: Set(course_id),
        enrolled_at: Set(Utc::now().fixed_offset()),
        payment_status: Set(status.as_str().to_string()),
        transaction_id: Set(None),
        progress: Set(0.0),
        completed_lessons: Set(serde_json::json!([])),
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryPostgres {
    async fn enroll_free(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let user = lock_user(&txn, user_id).await?;
        let mut enrolled: Vec<Uuid> = serde_json::from_value(user.enrolled_courses.clone())
            .map_err(|e| EnrollmentRepositoryError::SerializationError(e.to_string()))?;

        if enrolled.contains(&course_id) {
            return Err(EnrollmentRepositoryError::AlreadyEnrolled);
        }

        ensure_course(&txn, course_id).await?;

        enrolled.push(course_id);
        let enrolled_json = serde_json::to_value(&enrolled)
            .map_err(|e| EnrollmentRepositoryError::SerializationError(e.to_string()))?;

        let mut active_user: UserActiveModel = user.into();
        active_user.enrolled_courses = Set(enrolled_json);
        active_user.update(&txn).await.map_err(map_db_err)?;

        CourseEntity::update_many()
            .col_expr(
                CourseColumn::StudentCount,
                Expr::col(CourseColumn::StudentCount).add(1),
            )
            .filter(CourseColumn::Id.eq(course_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let inserted = new_enrollment(user_id, course_id, PaymentStatus::Completed)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        to_enrollment(inserted)
    }

    async fn begin_paid_enrollment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        lock_user(&txn, user_id).await?;
        ensure_course(&txn, course_id).await?;

        let pending = EnrollmentEntity::find()
            .filter(EnrollmentColumn::UserId.eq(user_id))
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .filter(EnrollmentColumn::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let enrollment = match pending {
            Some(existing) => existing,
            None => new_enrollment(user_id, course_id, PaymentStatus::Pending)
                .insert(&txn)
                .await
                .map_err(map_db_err)?,
        };

        txn.commit().await.map_err(map_db_err)?;
        to_enrollment(enrollment)
    }
}
