use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::{error, warn};

use super::auth_response::AuthResponse;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AuthResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<AuthResponse, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| {
                error!(error = %e, "User lookup failed during login");
                LoginError::QueryError(e.to_string())
            })?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // Checked after the password so a wrong guess cannot probe account state
        if !user.is_active {
            warn!(user_id = %user.id, "Login attempt on disabled account");
            return Err(LoginError::AccountDisabled);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, &user.email, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthResponse::bearer(
            access_token,
            self.token_provider.access_token_expiry(),
            &user,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::fixtures::sample_user;
    use crate::tests::support::in_memory::InMemoryUserStore;
    use crate::tests::support::stubs::{PlainTextHasher, StubTokenProvider};
    use serde_json::json;

    fn use_case(store: InMemoryUserStore) -> LoginUserUseCase<InMemoryUserStore> {
        LoginUserUseCase::new(
            store,
            Arc::new(PlainTextHasher),
            Arc::new(StubTokenProvider::default()),
        )
    }

    fn stored_user(is_active: bool) -> InMemoryUserStore {
        let mut user = sample_user(UserRole::Instructor);
        user.email = "grace@example.com".to_string();
        user.password_hash = "hashed:hopper42".to_string();
        user.is_active = is_active;
        InMemoryUserStore::with_users(vec![user])
    }

    #[test]
    fn test_login_request_email_normalized() {
        let request =
            LoginRequest::new("  Test@Example.COM  ".to_string(), "pw".to_string()).unwrap();
        assert_eq!(request.email(), "test@example.com");
    }

    #[test]
    fn test_login_request_deserialize_rejects_empty_password() {
        let result: Result<LoginRequest, _> =
            serde_json::from_value(json!({"email": "a@b.com", "password": ""}));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_login_success_returns_token_and_role() {
        let request =
            LoginRequest::new("grace@example.com".to_string(), "hopper42".to_string()).unwrap();

        let response = use_case(stored_user(true)).execute(request).await.unwrap();

        assert_eq!(response.token_type, "bearer");
        assert!(!response.access_token.is_empty());
        assert_eq!(response.user.role, UserRole::Instructor);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let request =
            LoginRequest::new("grace@example.com".to_string(), "nope".to_string()).unwrap();

        let err = use_case(stored_user(true)).execute(request).await.unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let request =
            LoginRequest::new("nobody@example.com".to_string(), "hopper42".to_string()).unwrap();

        let err = use_case(stored_user(true)).execute(request).await.unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_disabled_account() {
        let request =
            LoginRequest::new("grace@example.com".to_string(), "hopper42".to_string()).unwrap();

        let err = use_case(stored_user(false)).execute(request).await.unwrap_err();
        assert_eq!(err, LoginError::AccountDisabled);
    }
}
