use actix_web::{delete, post, web, HttpResponse, Responder};
use uuid::Uuid;

use super::save_section::save_error_response;
use crate::api::schemas::{ErrorResponse, SaveResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    NewCustomCategory, NewTechnicalSkill, SkillCatalogError,
};
use crate::modules::portfolio::domain::SectionKey;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn skill_catalog_error_response(err: SkillCatalogError) -> HttpResponse {
    match &err {
        SkillCatalogError::MissingName { .. } => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        SkillCatalogError::SkillAlreadyExists(_) => {
            ApiResponse::conflict("SKILL_ALREADY_EXISTS", &err.to_string())
        }
        SkillCatalogError::CategoryAlreadyExists(_) => {
            ApiResponse::conflict("CATEGORY_ALREADY_EXISTS", &err.to_string())
        }
        SkillCatalogError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Custom category not found")
        }
        SkillCatalogError::Save(e) => save_error_response(SectionKey::Skills, e),
    }
}

/// Add a technical skill
///
/// Appends one skill to the skills section. `category` is one of the
/// predefined categories; set `custom_category_id` instead to file it under
/// a custom category.
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/skills/technical",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = NewTechnicalSkill,
    responses(
        (status = 201, description = "Skill added", body = inline(SuccessResponse<SaveResponse>)),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (
            status = 409,
            description = "A skill with that name exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SKILL_ALREADY_EXISTS",
                    "message": "skill 'Rust' already exists"
                }
            })
        ),
        (status = 503, description = "Content storage unavailable", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/skills/technical")]
pub async fn add_technical_skill_handler(
    _admin: AdminSession,
    body: web::Json<NewTechnicalSkill>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.add_technical_skill.execute(body.into_inner()).await {
        Ok(outcome) => ApiResponse::created(outcome),
        Err(e) => skill_catalog_error_response(e),
    }
}

/// Add a custom skill category
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/skills/categories",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = NewCustomCategory,
    responses(
        (status = 201, description = "Category added", body = inline(SuccessResponse<SaveResponse>)),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (
            status = 409,
            description = "Name taken by a custom or predefined category",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "CATEGORY_ALREADY_EXISTS",
                    "message": "category 'DevOps' already exists"
                }
            })
        ),
        (status = 503, description = "Content storage unavailable", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/skills/categories")]
pub async fn add_custom_category_handler(
    _admin: AdminSession,
    body: web::Json<NewCustomCategory>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.add_custom_category.execute(body.into_inner()).await {
        Ok(outcome) => ApiResponse::created(outcome),
        Err(e) => skill_catalog_error_response(e),
    }
}

/// Remove a custom skill category
///
/// Skills filed under it move to `other`.
#[utoipa::path(
    delete,
    path = "/api/admin/portfolio/skills/categories/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Custom category id")
    ),
    responses(
        (status = 200, description = "Category removed", body = inline(SuccessResponse<SaveResponse>)),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (
            status = 404,
            description = "No custom category with that id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "CATEGORY_NOT_FOUND",
                    "message": "Custom category not found"
                }
            })
        ),
        (status = 503, description = "Content storage unavailable", body = ErrorResponse),
    )
)]
#[delete("/api/admin/portfolio/skills/categories/{id}")]
pub async fn remove_custom_category_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.remove_custom_category.execute(path.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => skill_catalog_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::portfolio::application::ports::incoming::use_cases::SaveSectionError;
    use crate::modules::portfolio::domain::{CustomCategory, Section, SkillsSection};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use crate::tests::support::stubs::StubSkillCatalogUseCase;

    async fn call(
        req: test::TestRequest,
        uc: StubSkillCatalogUseCase,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_skill_catalog(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(add_technical_skill_handler)
                .service(add_custom_category_handler)
                .service(remove_custom_category_handler),
        )
        .await;

        let resp = test::call_service(&app, req.insert_header(bearer_header()).to_request()).await;
        let status = resp.status();

        (status, test::read_body_json(resp).await)
    }

    fn add_skill(body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/admin/portfolio/skills/technical")
            .set_json(body)
    }

    fn add_category(body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/admin/portfolio/skills/categories")
            .set_json(body)
    }

    fn remove_category(id: Uuid) -> test::TestRequest {
        test::TestRequest::delete().uri(&format!("/api/admin/portfolio/skills/categories/{id}"))
    }

    #[actix_web::test]
    async fn test_add_technical_skill_created() {
        let (status, body) = call(
            add_skill(json!({ "name": "Kubernetes", "level": 70, "category": "devops" })),
            StubSkillCatalogUseCase::default(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["stored_in"], "database");
    }

    #[actix_web::test]
    async fn test_add_technical_skill_duplicate_conflict() {
        let (status, body) = call(
            add_skill(json!({ "name": "rust" })),
            StubSkillCatalogUseCase::error(SkillCatalogError::SkillAlreadyExists(
                "Rust".to_string(),
            )),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SKILL_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_add_technical_skill_blank_name() {
        let (status, body) = call(
            add_skill(json!({ "name": " " })),
            StubSkillCatalogUseCase::error(SkillCatalogError::MissingName { field: "name" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_add_custom_category_created() {
        let mut skills = SkillsSection::defaults();
        skills.custom_categories.push(CustomCategory {
            id: Uuid::new_v4(),
            name: "Cloud".to_string(),
        });

        let (status, body) = call(
            add_category(json!({ "name": "Cloud" })),
            StubSkillCatalogUseCase::saved(skills),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let names: Vec<&str> = body["data"]["content"]["custom_categories"]
            .as_array()
            .map(|cats| cats.iter().filter_map(|c| c["name"].as_str()).collect())
            .unwrap_or_default();
        assert!(names.contains(&"Cloud"));
    }

    #[actix_web::test]
    async fn test_add_custom_category_shadowing_predefined_conflict() {
        let (status, body) = call(
            add_category(json!({ "name": "DevOps" })),
            StubSkillCatalogUseCase::error(SkillCatalogError::CategoryAlreadyExists(
                "DevOps".to_string(),
            )),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CATEGORY_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_remove_custom_category_success() {
        let (status, body) = call(
            remove_category(Uuid::new_v4()),
            StubSkillCatalogUseCase::default(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn test_remove_unknown_custom_category_not_found() {
        let (status, body) = call(
            remove_category(Uuid::new_v4()),
            StubSkillCatalogUseCase::error(SkillCatalogError::CategoryNotFound),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "CATEGORY_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_add_skill_storage_unavailable() {
        let (status, body) = call(
            add_skill(json!({ "name": "Go" })),
            StubSkillCatalogUseCase::error(SkillCatalogError::Save(
                SaveSectionError::StorageUnavailable("read-only filesystem".to_string()),
            )),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "STORAGE_UNAVAILABLE");
    }
}
