use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::courses::{
    decode_lessons, ActiveModel as CourseActiveModel, Entity as CourseEntity, Model as CourseModel,
};
use super::sea_orm_entity::enrollments::{Column as EnrollmentColumn, Entity as EnrollmentEntity};
use crate::course::application::domain::entities::{Course, Lesson};
use crate::course::application::domain::lessons::{
    append_lesson, remove_lesson, replace_lesson, total_duration, LessonDraft,
};
use crate::course::application::ports::outgoing::{
    CourseChanges, CourseRepository, CourseRepositoryError, NewCourse,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Runs `apply` against the course's lessons while holding its row lock,
    /// then writes the lessons back with a recomputed total duration.
    async fn mutate_lessons<T, F>(&self, course_id: Uuid, apply: F) -> Result<T, CourseRepositoryError>
    where
        F: FnOnce(&mut Vec<Lesson>) -> Result<T, CourseRepositoryError> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = lock_course(&txn, course_id).await?;
        let mut lessons =
            decode_lessons(&model.lessons).map_err(CourseRepositoryError::SerializationError)?;

        let output = apply(&mut lessons)?;

        let mut active: CourseActiveModel = model.into();
        active.total_duration = Set(total_duration(&lessons));
        active.lessons = Set(to_json(&lessons)?);
        active.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(output)
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create_course(&self, data: NewCourse) -> Result<Course, CourseRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = CourseActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            instructor_name: Set(data.instructor_name),
            instructor_id: Set(data.instructor_id),
            course_type: Set(data.course_type.as_str().to_string()),
            price: Set(data.price),
            thumbnail_url: Set(data.thumbnail_url),
            category: Set(data.category),
            tags: Set(to_json(&data.tags)?),
            lessons: Set(serde_json::json!([])),
            total_duration: Set(None),
            student_count: Set(0),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_course(inserted)
    }

    async fn update_course(
        &self,
        course_id: Uuid,
        changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError> {
        let model = CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CourseRepositoryError::NotFound)?;

        let mut active: CourseActiveModel = model.into();
        active.title = Set(changes.title);
        active.description = Set(changes.description);
        active.instructor_name = Set(changes.instructor_name);
        active.course_type = Set(changes.course_type.as_str().to_string());
        active.price = Set(changes.price);
        active.thumbnail_url = Set(changes.thumbnail_url);
        active.category = Set(changes.category);
        active.tags = Set(to_json(&changes.tags)?);
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        to_course(updated)
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        lock_course(&txn, course_id).await?;

        let enrollments = EnrollmentEntity::find()
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .count(&txn)
            .await
            .map_err(map_db_err)?;

        if enrollments > 0 {
            return Err(CourseRepositoryError::HasEnrollments(enrollments));
        }

        CourseEntity::delete_by_id(course_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }

    async fn add_lesson(
        &self,
        course_id: Uuid,
        draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError> {
        self.mutate_lessons(course_id, |lessons| Ok(append_lesson(lessons, draft)))
            .await
    }

    async fn update_lesson(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError> {
        self.mutate_lessons(course_id, |lessons| {
            replace_lesson(lessons, lesson_id, draft).ok_or(CourseRepositoryError::LessonNotFound)
        })
        .await
    }

    async fn delete_lesson(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<(), CourseRepositoryError> {
        self.mutate_lessons(course_id, |lessons| {
            if remove_lesson(lessons, lesson_id) {
                Ok(())
            } else {
                Err(CourseRepositoryError::LessonNotFound)
            }
        })
        .await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn lock_course(
    txn: &DatabaseTransaction,
    course_id: Uuid,
) -> Result<CourseModel, CourseRepositoryError> {
    CourseEntity::find_by_id(course_id)
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(map_db_err)?
        .ok_or(CourseRepositoryError::NotFound)
}

fn to_course(model: CourseModel) -> Result<Course, CourseRepositoryError> {
    model
        .into_domain()
        .map_err(CourseRepositoryError::SerializationError)
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, CourseRepositoryError> {
    serde_json::to_value(value).map_err(|e| CourseRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}
