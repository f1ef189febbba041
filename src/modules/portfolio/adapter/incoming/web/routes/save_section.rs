use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SaveResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::ports::incoming::use_cases::SaveSectionError;
use crate::modules::portfolio::application::SectionUseCases;
use crate::modules::portfolio::domain::{ContentSource, Section, SectionKey};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn save<S: Section>(uc: &SectionUseCases<S>, payload: serde_json::Value) -> HttpResponse {
    let draft = match serde_json::from_value::<S::Draft>(payload) {
        Ok(draft) => draft,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &format!("{}: {e}", S::KEY))
        }
    };

    match uc.save.execute(draft).await {
        Ok(outcome) => {
            if outcome.stored_in == ContentSource::Fallback {
                warn!(section = %S::KEY, "Section saved to fallback store only");
            } else {
                info!(section = %S::KEY, "Section saved");
            }
            ApiResponse::success(outcome)
        }
        Err(e) => save_error_response(S::KEY, &e),
    }
}

/// Shared by every route that ends in a section save.
pub(super) fn save_error_response(key: SectionKey, err: &SaveSectionError) -> HttpResponse {
    match err {
        SaveSectionError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        SaveSectionError::StorageUnavailable(msg) => {
            error!(section = %key, error = %msg, "Database and fallback store both unavailable");
            ApiResponse::service_unavailable(
                "STORAGE_UNAVAILABLE",
                "Content storage is temporarily unavailable",
            )
        }

        SaveSectionError::RepositoryError(msg) => {
            error!(section = %key, error = %msg, "Failed to save section");
            ApiResponse::internal_error()
        }
    }
}

/// Replace one portfolio section
///
/// The payload is the section's whole content. Names are trimmed and
/// de-duplicated, placeholder ids are replaced by UUIDs. When the database
/// is unreachable the content lands in the fallback store and
/// `stored_in` says so.
#[utoipa::path(
    put,
    path = "/api/admin/portfolio/{section}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("section" = String, Path, description = "about, contact, education, experience, skills, projects, certifications or achievements")
    ),
    request_body(content = Object, description = "Section content in its public shape"),
    responses(
        (
            status = 200,
            description = "Section saved",
            body = inline(SuccessResponse<SaveResponse>),
            example = json!({
                "success": true,
                "data": {
                    "content": [
                        {
                            "id": "0b0e7c7e-6a55-4a57-9d3c-6b1a3a0c8d11",
                            "name": "CKA",
                            "issuer": "CNCF",
                            "issue_date": "2024-03",
                            "credential_url": null
                        }
                    ],
                    "stored_in": "database",
                    "dropped_duplicates": []
                }
            })
        ),
        (
            status = 400,
            description = "Payload does not fit the section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "experience[0].start_date: is required"
                }
            })
        ),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (
            status = 503,
            description = "Neither the database nor the fallback store accepted the write",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "STORAGE_UNAVAILABLE",
                    "message": "Content storage is temporarily unavailable"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admin/portfolio/{section}")]
pub async fn save_section_handler(
    admin: AdminSession,
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = match path.into_inner().parse::<SectionKey>() {
        Ok(key) => key,
        Err(e) => return ApiResponse::not_found("SECTION_NOT_FOUND", &e.to_string()),
    };

    info!(section = %key, admin = %admin.email, "Saving section");

    let payload = body.into_inner();
    let sections = &data.portfolio.sections;
    match key {
        SectionKey::About => save(&sections.about, payload).await,
        SectionKey::Contact => save(&sections.contact, payload).await,
        SectionKey::Education => save(&sections.education, payload).await,
        SectionKey::Experience => save(&sections.experience, payload).await,
        SectionKey::Skills => save(&sections.skills, payload).await,
        SectionKey::Projects => save(&sections.projects, payload).await,
        SectionKey::Certifications => save(&sections.certifications, payload).await,
        SectionKey::Achievements => save(&sections.achievements, payload).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::portfolio::application::{SectionCatalog, SectionUseCases};
    use crate::modules::portfolio::domain::{About, ValidationError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::portfolio_fixtures::stub_section_catalog;
    use crate::tests::support::stubs::{RecordingSaveSectionUseCase, StubGetSectionUseCase};

    fn catalog_saving_about(save: RecordingSaveSectionUseCase<About>) -> SectionCatalog {
        SectionCatalog {
            about: SectionUseCases {
                get: Arc::new(StubGetSectionUseCase::<About>::from_defaults()),
                save: Arc::new(save),
            },
            ..stub_section_catalog()
        }
    }

    async fn put(
        uri: &str,
        body: Value,
        builder: TestAppStateBuilder,
        authorized: bool,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(save_section_handler),
        )
        .await;

        let mut req = test::TestRequest::put().uri(uri).set_json(body);
        if authorized {
            req = req.insert_header(bearer_header());
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();

        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_save_section_success() {
        let (status, body) = put(
            "/api/admin/portfolio/about",
            json!({ "name": "  Jane Doe ", "title": "Engineer", "bio": "" }),
            TestAppStateBuilder::default(),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["stored_in"], "database");
        assert_eq!(body["data"]["content"]["name"], "Jane Doe");
    }

    #[actix_web::test]
    async fn test_save_section_reports_dropped_duplicates() {
        let (status, body) = put(
            "/api/admin/portfolio/skills",
            json!({
                "technical": [
                    { "name": "Rust", "level": 90, "category": "backend" },
                    { "name": "rust", "level": 40, "category": "backend" }
                ]
            }),
            TestAppStateBuilder::default(),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["content"]["technical"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["data"]["dropped_duplicates"][0], "rust");
    }

    #[actix_web::test]
    async fn test_save_section_to_fallback() {
        let builder = TestAppStateBuilder::default().with_sections(catalog_saving_about(
            RecordingSaveSectionUseCase::stored_in(ContentSource::Fallback),
        ));

        let (status, body) = put(
            "/api/admin/portfolio/about",
            json!({ "name": "Jane Doe" }),
            builder,
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["stored_in"], "fallback");
    }

    #[actix_web::test]
    async fn test_save_section_missing_required_field() {
        let (status, body) = put(
            "/api/admin/portfolio/about",
            json!({ "name": "   " }),
            TestAppStateBuilder::default(),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_save_section_wrong_payload_shape() {
        let (status, body) = put(
            "/api/admin/portfolio/projects",
            json!({ "title": "not a list" }),
            TestAppStateBuilder::default(),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_save_section_storage_unavailable() {
        let builder = TestAppStateBuilder::default().with_sections(catalog_saving_about(
            RecordingSaveSectionUseCase::failing(SaveSectionError::StorageUnavailable(
                "disk full".to_string(),
            )),
        ));

        let (status, body) = put(
            "/api/admin/portfolio/about",
            json!({ "name": "Jane Doe" }),
            builder,
            true,
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "STORAGE_UNAVAILABLE");
    }

    #[actix_web::test]
    async fn test_save_section_repository_error() {
        let builder = TestAppStateBuilder::default().with_sections(catalog_saving_about(
            RecordingSaveSectionUseCase::failing(SaveSectionError::RepositoryError(
                "constraint".to_string(),
            )),
        ));

        let (status, body) = put(
            "/api/admin/portfolio/about",
            json!({ "name": "Jane Doe" }),
            builder,
            true,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_save_unknown_section_not_found() {
        let (status, body) = put(
            "/api/admin/portfolio/blog",
            json!([]),
            TestAppStateBuilder::default(),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "SECTION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_save_section_requires_admin() {
        let (status, body) = put(
            "/api/admin/portfolio/about",
            json!({ "name": "Jane Doe" }),
            TestAppStateBuilder::default(),
            false,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_validation_error_maps_to_bad_request() {
        let resp = save_error_response(
            SectionKey::Experience,
            &SaveSectionError::Validation(ValidationError::new(
                "experience[0].start_date",
                "is required",
            )),
        );

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
