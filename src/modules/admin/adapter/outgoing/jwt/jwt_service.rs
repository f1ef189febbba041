use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::modules::admin::application::ports::outgoing::{
    AdminClaims, IssuedToken, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("session_expiry", &self.config.session_expiry)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn encode_claims(&self, claims: &AdminClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_session_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = (now + Duration::seconds(self.config.session_expiry)).timestamp();

        let claims = AdminClaims {
            sub: subject.to_string(),
            iss: self.config.issuer.clone(),
            exp: expires_at,
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        Ok(IssuedToken {
            token: self.encode_claims(&claims)?,
            expires_at,
        })
    }

    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: Foreign issuer");
                    TokenError::InvalidIssuer
                }
                _ => {
                    tracing::warn!(error = %e, "Token verification failed: Malformed token");
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }
}
