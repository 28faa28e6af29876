use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::course::application::domain::entities::{Course, CourseType, Lesson};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub instructor_name: String,
    #[sea_orm(nullable)]
    pub instructor_id: Option<Uuid>,
    pub course_type: String,
    #[sea_orm(nullable)]
    pub price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail_url: Option<String>,
    #[sea_orm(nullable)]
    pub category: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    /// JSONB array of lesson documents, kept in `order` sequence
    #[sea_orm(column_type = "JsonBinary")]
    pub lessons: Json,
    #[sea_orm(nullable)]
    pub total_duration: Option<i32>,
    pub student_count: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

pub fn decode_lessons(value: &Json) -> Result<Vec<Lesson>, String> {
    serde_json::from_value(value.clone()).map_err(|e| format!("lessons: {e}"))
}

impl Model {
    pub fn into_domain(self) -> Result<Course, String> {
        let course_type = self.course_type.parse::<CourseType>()?;
        let tags: Vec<String> =
            serde_json::from_value(self.tags).map_err(|e| format!("tags: {e}"))?;
        let lessons = decode_lessons(&self.lessons)?;

        Ok(Course {
            id: self.id,
            title: self.title,
            description: self.description,
            instructor_name: self.instructor_name,
            instructor_id: self.instructor_id,
            course_type,
            price: self.price,
            thumbnail_url: self.thumbnail_url,
            category: self.category,
            tags,
            lessons,
            total_duration: self.total_duration,
            student_count: self.student_count,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
