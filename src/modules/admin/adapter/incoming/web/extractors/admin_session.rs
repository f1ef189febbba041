use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};

use crate::modules::admin::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

/// A request carrying a valid admin bearer token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
    pub expires_at: i64,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            tracing::error!("TokenProvider is not registered as app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match token_provider.verify_token(token) {
            Ok(claims) => ready(Ok(AdminSession {
                email: claims.sub,
                expires_at: claims.exp,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}
