use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    #[sea_orm(nullable)]
    pub phone: Option<String>,
    /// JSONB array of course ids
    #[sea_orm(column_type = "JsonBinary")]
    pub enrolled_courses: Json,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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

impl Model {
    /// Decodes the stored row. Fails on an unknown role or a malformed
    /// `enrolled_courses` document.
    pub fn into_domain(self) -> Result<User, String> {
        let role = self.role.parse::<UserRole>().map_err(|e| e.to_string())?;
        let enrolled_courses: Vec<Uuid> = serde_json::from_value(self.enrolled_courses)
            .map_err(|e| format!("enrolled_courses: {e}"))?;

        Ok(User {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            password_hash: self.password_hash,
            role,
            phone: self.phone,
            enrolled_courses,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
