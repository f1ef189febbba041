// src/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::modules::admin::adapter::outgoing::jwt::JwtConfig;
use crate::modules::admin::application::use_cases::login_admin::AdminCredentials;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Everything the server reads from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub fallback_path: PathBuf,
    pub seed_on_start: bool,
    pub admin: AdminCredentials,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_email = required("ADMIN_EMAIL")?;
        if !email_address::EmailAddress::is_valid(admin_email.trim()) {
            return Err(ConfigError::Invalid {
                key: "ADMIN_EMAIL",
                reason: "not an email address".to_string(),
            });
        }

        let password_hash = required("ADMIN_PASSWORD_HASH")?;
        if !password_hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid {
                key: "ADMIN_PASSWORD_HASH",
                reason: "expected an Argon2 PHC string".to_string(),
            });
        }

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed("PORT", 8080)?,
            database_url: required("DATABASE_URL")?,
            fallback_path: optional("FALLBACK_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data/portfolio_data.json")),
            seed_on_start: flag("SEED_ON_START")?,
            admin: AdminCredentials {
                email: admin_email,
                password_hash,
            },
            jwt: JwtConfig::from_env()?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ──── Helpers ────

/// Unset and blank are the same thing.
pub(crate) fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

pub(crate) fn parsed<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

fn flag(key: &'static str) -> Result<bool, ConfigError> {
    match optional(key).map(|v| v.to_lowercase()).as_deref() {
        None | Some("false") | Some("0") | Some("no") => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some(other) => Err(ConfigError::Invalid {
            key,
            reason: format!("expected true or false, got '{other}'"),
        }),
    }
}
