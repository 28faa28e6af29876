use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    /// The stored hash is not a PHC string this hasher understands.
    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Password verification failed: {0}")]
    VerifyFailed(String),

    #[error("Background task failed")]
    TaskFailed,
}

/// One-way password hashing. Implementations may be slow on purpose, so
/// callers must not hold locks across these calls.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password; `Err` only when the check itself fails.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
