use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::admin::application::domain::role_policy::authorize_role_change;
use crate::admin::application::ports::incoming::use_cases::{
    UpdateUserRoleError, UpdateUserRoleUseCase,
};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};

pub struct UpdateUserRoleService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repo: R,
}

impl<Q, R> UpdateUserRoleService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repo: R) -> Self {
        Self { query, repo }
    }
}

#[async_trait]
impl<Q, R> UpdateUserRoleUseCase for UpdateUserRoleService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &User,
        target_id: Uuid,
        role: &str,
    ) -> Result<User, UpdateUserRoleError> {
        let new_role = role
            .parse::<UserRole>()
            .map_err(|e| UpdateUserRoleError::InvalidRole(e.0))?;

        let target = self
            .query
            .find_by_id(target_id)
            .await?
            .ok_or(UpdateUserRoleError::UserNotFound)?;

        if let Err(violation) = authorize_role_change(actor, &target, new_role) {
            warn!(actor_id = %actor.id, target_id = %target.id, %new_role, "Role change refused: {}", violation);
            return Err(violation.into());
        }

        let updated = self.repo.update_role(target.id, new_role).await?;
        info!(actor_id = %actor.id, target_id = %updated.id, %new_role, "User role updated");
        Ok(updated)
    }
}
