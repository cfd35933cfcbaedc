//! Environment configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey/Redis URL backing the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Socket address the HTTP server listens on (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
    /// Days of inactivity before a session expires (`SESSION_EXPIRY_DAYS`)
    pub session_expiry_days: i64,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration using the provided variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let session_expiry_days = match lookup("SESSION_EXPIRY_DAYS") {
            None => DEFAULT_SESSION_EXPIRY_DAYS,
            Some(value) => match value.parse::<i64>() {
                Ok(days) if days > 0 => days,
                Ok(days) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_EXPIRY_DAYS".to_string(),
                        reason: format!("expected a positive number of days, got {}", days),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_EXPIRY_DAYS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address,
            session_expiry_days,
        })
    }
}
