use async_trait::async_trait;

use crate::admin::application::ports::incoming::use_cases::{ListUsersError, ListUsersUseCase};
use crate::admin::application::ports::outgoing::AdminQuery;
use crate::auth::application::domain::entities::User;

pub struct ListUsersService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        Ok(self.query.list_users().await?)
    }
}
