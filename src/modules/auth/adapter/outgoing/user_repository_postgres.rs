use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};
use crate::auth::application::domain::entities::{NewUser, User, UserRole};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: Uuid) -> Result<UserActiveModel, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;
        Ok(model.into())
    }

    async fn save(&self, active: UserActiveModel) -> Result<User, UserRepositoryError> {
        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        updated.into_domain().map_err(UserRepositoryError::DatabaseError)
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(user.full_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            phone: Set(user.phone),
            enrolled_courses: Set(serde_json::json!([])),
            is_active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            map_db_err(e)
        })?;

        inserted
            .into_domain()
            .map_err(UserRepositoryError::DatabaseError)
    }

    async fn update_role(&self, user_id: Uuid, role: UserRole) -> Result<User, UserRepositoryError> {
        let mut active = self.load(user_id).await?;
        active.role = Set(role.as_str().to_string());
        self.save(active).await
    }

    async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<User, UserRepositoryError> {
        let mut active = self.load(user_id).await?;
        active.is_active = Set(is_active);
        self.save(active).await
    }
}
