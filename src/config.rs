//! Environment configuration, loaded once at process start.

use crate::error::ConfigError;
use std::env;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment. `DB_NAME` is required; the
    /// remaining variables fall back to local-development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AppConfig {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "root".into()),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_name: env::var("DB_NAME").map_err(|_| ConfigError::MissingVar("DB_NAME"))?,
            port: match env::var("PORT") {
                Err(_) => DEFAULT_PORT,
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            },
        })
    }
}
