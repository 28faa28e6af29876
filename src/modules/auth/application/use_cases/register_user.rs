use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{error, info};

use super::auth_response::AuthResponse;
use crate::auth::application::domain::entities::{NewUser, UserRole};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

// ========================= Register Request =========================
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    full_name: String,
    email: String,
    password: String,
    phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
}

impl RegisterUserRequest {
    pub fn new(
        full_name: String,
        email: String,
        password: String,
        phone: Option<String>,
    ) -> Result<Self, RegisterRequestError> {
        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(RegisterRequestError::EmptyFullName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        let phone = phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            full_name,
            email: email.to_lowercase(),
            password,
            phone,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Register Error =========================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterUserRequest)
        -> Result<AuthResponse, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<AuthResponse, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // The unique index still guards against a concurrent registration
        let user = self
            .repository
            .create_user(NewUser {
                full_name: request.full_name,
                email: request.email,
                password_hash,
                phone: request.phone,
                role: UserRole::Student,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => {
                    RegisterUserError::EmailAlreadyRegistered
                }
                other => {
                    error!(error = %other, "Failed to persist new user");
                    RegisterUserError::RepositoryError(other.to_string())
                }
            })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, &user.email, user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthResponse::bearer(
            access_token,
            self.token_provider.access_token_expiry(),
            &user,
        ))
    }
}
