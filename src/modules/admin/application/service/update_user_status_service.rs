use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::admin::application::domain::role_policy::authorize_status_change;
use crate::admin::application::ports::incoming::use_cases::{
    UpdateUserStatusError, UpdateUserStatusUseCase,
};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};

pub struct UpdateUserStatusService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repo: R,
}

impl<Q, R> UpdateUserStatusService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repo: R) -> Self {
        Self { query, repo }
    }
}

#[async_trait]
impl<Q, R> UpdateUserStatusUseCase for UpdateUserStatusService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &User,
        target_id: Uuid,
        is_active: bool,
    ) -> Result<User, UpdateUserStatusError> {
        let target = self
            .query
            .find_by_id(target_id)
            .await?
            .ok_or(UpdateUserStatusError::UserNotFound)?;

        if let Err(violation) = authorize_status_change(actor, &target, is_active) {
            warn!(actor_id = %actor.id, target_id = %target.id, is_active, "Status change refused: {}", violation);
            return Err(violation.into());
        }

        let updated = self.repo.set_active(target.id, is_active).await?;
        info!(actor_id = %actor.id, target_id = %updated.id, is_active, "User status updated");
        Ok(updated)
    }
}
