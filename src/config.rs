use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfig {
    pub store_id: Option<String>,
    pub store_password: Option<String>,
    pub sandbox: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub app_name: String,
    /// Gateway credentials. Loaded so deployments can set them; nothing reads them yet.
    pub payment: PaymentConfig,
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_env_file() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => 8001,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DB_MAX_CONNECTIONS value: {raw}"))?,
            None => 20,
        };

        let sandbox = lookup("PAYMENT_SANDBOX")
            .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(true);

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            db_max_connections,
            app_name: lookup("APP_NAME").unwrap_or_else(|| "Course Platform API".to_string()),
            payment: PaymentConfig {
                store_id: lookup("PAYMENT_STORE_ID"),
                store_password: lookup("PAYMENT_STORE_PASSWORD"),
                sandbox,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/courses")]).unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:8001");
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.app_name, "Course Platform API");
        assert!(config.payment.sandbox);
        assert!(config.payment.store_id.is_none());
    }

    #[test]
    fn requires_database_url() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = load(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value"));
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://x"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("APP_NAME", "Academy"),
            ("PAYMENT_STORE_ID", "store"),
            ("PAYMENT_SANDBOX", "false"),
        ])
        .unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:9000");
        assert_eq!(config.app_name, "Academy");
        assert_eq!(config.payment.store_id.as_deref(), Some("store"));
        assert!(!config.payment.sandbox);
    }
}
