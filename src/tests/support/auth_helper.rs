use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::admin::application::ports::outgoing::TokenProvider;

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "portfolio".to_string(),
        secret_key: "test_secret_key_for_testing_only_00".to_string(),
        session_expiry: 3600,
    })
}

/// App data the `AdminSession` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());
    web::Data::new(provider)
}

pub fn bearer_header() -> (&'static str, String) {
    let token = test_token_service()
        .issue_session_token("admin@example.com")
        .map(|issued| issued.token)
        .unwrap_or_default();
    ("Authorization", format!("Bearer {token}"))
}
