use anyhow::Context;
use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

/// Argon2id hasher. Hashing and verification run on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Self { params })
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`,
    /// falling back to the argon2 crate defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        fn read(key: &str, default: u32) -> anyhow::Result<u32> {
            match std::env::var(key) {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid {key} value: {raw}")),
                Err(_) => Ok(default),
            }
        }

        let memory_kib = read("ARGON2_MEMORY_KIB", Params::DEFAULT_M_COST)?;
        let iterations = read("ARGON2_ITERATIONS", Params::DEFAULT_T_COST)?;
        let parallelism = read("ARGON2_PARALLELISM", Params::DEFAULT_P_COST)?;

        Self::with_params(memory_kib, iterations, parallelism)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashError::HashFailed(e.to_string()))
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::MalformedHash)?;

            // Params are taken from the PHC string itself
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => Err(HashError::VerifyFailed(e.to_string())),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
