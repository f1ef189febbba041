use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by someone else")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims of an admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin email
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Unix timestamp, seconds
    pub expires_at: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, subject: &str) -> Result<IssuedToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
