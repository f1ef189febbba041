use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use tracing::warn;

use crate::modules::admin::application::ports::outgoing::{PasswordHasher, TokenProvider};

// ========================= Login Request =========================

/// Login payload that already passed shape validation.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSessionToken {
    pub access_token: String,
    /// Unix timestamp after which the session is over
    pub expires_at: i64,
}

/// The single admin account, taken from configuration.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

// ============================ Login Admin Use Case =============================

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AdminSessionToken, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            credentials: AdminCredentials {
                email: credentials.email.trim().to_lowercase(),
                password_hash: credentials.password_hash,
            },
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<AdminSessionToken, LoginError> {
        let email_matches = request.email() == self.credentials.email;

        // the hash is checked even for an unknown email so both failures take as long
        let password_matches = self
            .password_hasher
            .verify_password(request.password(), &self.credentials.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !(email_matches && password_matches) {
            warn!(email = %request.email(), "Rejected admin login");
            return Err(LoginError::InvalidCredentials);
        }

        let issued = self
            .token_provider
            .issue_session_token(&self.credentials.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AdminSessionToken {
            access_token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
