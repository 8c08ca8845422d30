//! Application configuration.
//!
//! `AppConfig` is loaded once at process start from the environment (and an
//! optional `.env` file) and handed to whoever needs it. Optional values fall
//! back to development defaults; required values produce a [`ConfigError`].

use std::env;
use std::time::Duration;

/// Errors raised while reading configuration values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub db_connect_timeout_secs: u64,
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        Ok(Self {
            env: or("APP_ENV", "development"),
            project_name: or("PROJECT_NAME", "lms-server"),
            log_level: or("LOG_LEVEL", "api=info,services=info"),
            log_file: or("LOG_FILE", "api.log"),
            log_to_stdout: or("LOG_TO_STDOUT", "false") == "true",
            database_path: lookup("DATABASE_PATH").ok_or(ConfigError::Missing("DATABASE_PATH"))?,
            host: or("HOST", "127.0.0.1"),
            port: parse(&lookup, "PORT", 3000)?,
            jwt_secret: lookup("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .ok_or(ConfigError::Missing("JWT_SECRET"))?,
            db_connect_timeout_secs: parse(&lookup, "DB_CONNECT_TIMEOUT_SECS", 8)?,
            db_acquire_timeout_secs: parse(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 8)?,
        })
    }

    /// True when running with `APP_ENV=production`.
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }

    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout_secs)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    /// Resolves `database_path` into a SeaORM connection URL.
    ///
    /// Values that already look like a DSN are used as-is; anything else is
    /// treated as a SQLite file path and opened in read-write-create mode.
    pub fn database_url(&self) -> String {
        let path = &self.database_path;
        if path.starts_with("sqlite:") || path.starts_with("postgres://") || path.starts_with("mysql://") {
            path.clone()
        } else {
            format!("sqlite://{path}?mode=rwc")
        }
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
