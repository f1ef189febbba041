use crate::config::{self, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const SESSION_SECS_RANGE: std::ops::RangeInclusive<i64> = 60..=86400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Admin session lifetime in seconds
    pub session_expiry: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `ADMIN_SESSION_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = config::required("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let session_expiry = config::parsed("ADMIN_SESSION_SECS", 3600_i64)?;
        if !SESSION_SECS_RANGE.contains(&session_expiry) {
            return Err(ConfigError::Invalid {
                key: "ADMIN_SESSION_SECS",
                reason: "must be between 60 and 86400 seconds".to_string(),
            });
        }

        let issuer = config::optional("JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}
