use anyhow::{bail, Context};
use std::env;

/// Upper bound for access token lifetime: 24 hours.
pub const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: i64) -> anyhow::Result<i64> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid {key} value: {raw}")),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            bail!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let access_token_expiry =
            Self::parse_expiry("JWT_ACCESS_EXPIRY", MAX_ACCESS_EXPIRY_SECS)?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            bail!("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "course-platform".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
