//! Process configuration read from the environment (and `.env` when present).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Deployment environment; selects log format and level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Env {
    Local,
    Dev,
    Prod,
}

impl FromStr for Env {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Env::Local),
            "dev" => Ok(Env::Dev),
            "prod" => Ok(Env::Prod),
            other => Err(ConfigError::Invalid {
                key: "APP_ENV",
                reason: format!("expected local, dev or prod, got '{}'", other),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub env: Env,
    pub database_url: String,
    pub max_connections: u32,
    pub http_address: String,
    /// Upper bound on a single request, storage calls included.
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load `.env` if present, then read `APP_ENV`, `DATABASE_URL`,
    /// `DB_MAX_CONNECTIONS`, `HTTP_ADDRESS` and `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let env = get("APP_ENV", "local").parse::<Env>()?;
        let max_connections = get("DB_MAX_CONNECTIONS", "5")
            .parse::<u32>()
            .map_err(|e| ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: format!("{}", e),
            })?;
        let timeout_secs = get("HTTP_TIMEOUT_SECS", "4")
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                key: "HTTP_TIMEOUT_SECS",
                reason: format!("{}", e),
            })?;

        Ok(Self {
            env,
            database_url: get("DATABASE_URL", "sqlite://storage.db"),
            max_connections,
            http_address: get("HTTP_ADDRESS", "localhost:8080"),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.env, Env::Local);
        assert_eq!(cfg.database_url, "sqlite://storage.db");
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.http_address, "localhost:8080");
        assert_eq!(cfg.http_timeout, Duration::from_secs(4));
    }

    #[test]
    fn values_are_read() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("APP_ENV", "prod"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("HTTP_ADDRESS", "0.0.0.0:3000"),
            ("HTTP_TIMEOUT_SECS", "10"),
        ]))
        .unwrap();
        assert_eq!(cfg.env, Env::Prod);
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.http_address, "0.0.0.0:3000");
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("APP_ENV", "staging")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("HTTP_TIMEOUT_SECS", "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "-1")])).is_err());
    }
}
