use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::course::application::domain::entities::{Enrollment, PaymentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTimeWithTimeZone,
    pub payment_status: String,
    #[sea_orm(nullable)]
    pub transaction_id: Option<String>,
    pub progress: f64,
    /// JSONB array of lesson ids
    #[sea_orm(column_type = "JsonBinary")]
    pub completed_lessons: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<Enrollment, String> {
        let payment_status = self.payment_status.parse::<PaymentStatus>()?;
        let completed_lessons: Vec<Uuid> = serde_json::from_value(self.completed_lessons)
            .map_err(|e| format!("completed_lessons: {e}"))?;

        Ok(Enrollment {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
            enrolled_at: self.enrolled_at.with_timezone(&chrono::Utc),
            payment_status,
            transaction_id: self.transaction_id,
            progress: self.progress,
            completed_lessons,
        })
    }
}
