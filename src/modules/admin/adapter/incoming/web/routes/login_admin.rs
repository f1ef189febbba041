use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin login request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// HS256 JWT, send as `Authorization: Bearer <token>`
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: &'static str,

    /// Unix timestamp (seconds) when the session ends
    #[schema(example = 1735689600)]
    expires_at: i64,
}

/// Admin login
///
/// Checks the configured admin credentials and opens a session.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "token_type": "Bearer",
                    "expires_at": 1735689600
                }
            })
        ),
        (
            status = 400,
            description = "Malformed email or empty password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid email format"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin_use_case.execute(request).await {
        Ok(session) => {
            info!("Admin logged in");
            ApiResponse::success(LoginResponse {
                access_token: session.access_token,
                token_type: "Bearer",
                expires_at: session.expires_at,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Admin login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubLoginAdminUseCase;

    async fn post_login(
        uc: StubLoginAdminUseCase,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_login_admin(uc).build();
        let app = test::init_service(App::new().app_data(app_state).service(login_admin_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();

        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let (status, body) = post_login(
            StubLoginAdminUseCase::success("jwt-token", 1_735_689_600),
            json!({ "email": "admin@example.com", "password": "s3cret" }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "jwt-token");
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert_eq!(body["data"]["expires_at"], 1_735_689_600);
    }

    #[actix_web::test]
    async fn test_login_invalid_email_is_validation_error() {
        let (status, body) = post_login(
            StubLoginAdminUseCase::success("unused", 0),
            json!({ "email": "admin", "password": "s3cret" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let (status, body) = post_login(
            StubLoginAdminUseCase::error(LoginError::InvalidCredentials),
            json!({ "email": "admin@example.com", "password": "nope" }),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_login_broken_hash_is_internal_error() {
        let (status, body) = post_login(
            StubLoginAdminUseCase::error(LoginError::PasswordVerificationFailed(
                "malformed".to_string(),
            )),
            json!({ "email": "admin@example.com", "password": "s3cret" }),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
