use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, UserQuery};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveUserError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Turns a bearer token into the caller's current user record.
#[async_trait]
pub trait IResolveCurrentUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<User, ResolveUserError>;
}

#[derive(Clone)]
pub struct ResolveCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> ResolveCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> IResolveCurrentUserUseCase for ResolveCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, token: &str) -> Result<User, ResolveUserError> {
        let claims = self.token_provider.verify_token(token).map_err(|e| match e {
            TokenError::TokenExpired => ResolveUserError::TokenExpired,
            _ => ResolveUserError::InvalidToken,
        })?;

        if claims.token_type != "access" {
            warn!(token_type = %claims.token_type, "Non-access token presented");
            return Err(ResolveUserError::InvalidToken);
        }

        // Role and status are read from the store, never trusted from the claims
        let user = self
            .query
            .find_by_email(&claims.sub)
            .await
            .map_err(|e| {
                error!(error = %e, "User lookup failed while resolving token");
                ResolveUserError::QueryError(e.to_string())
            })?
            .ok_or(ResolveUserError::UserNotFound)?;

        if !user.is_active {
            return Err(ResolveUserError::AccountDisabled);
        }

        Ok(user)
    }
}
