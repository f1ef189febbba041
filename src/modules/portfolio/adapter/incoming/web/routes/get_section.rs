use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SectionResponse, SuccessResponse};
use crate::modules::portfolio::application::SectionUseCases;
use crate::modules::portfolio::domain::{Section, SectionKey};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn view<S: Section>(uc: &SectionUseCases<S>) -> HttpResponse {
    ApiResponse::success(uc.get.execute().await)
}

/// Read one portfolio section
///
/// Served from the database, then the fallback store, then the built-in
/// defaults. `source` tells which one answered.
#[utoipa::path(
    get,
    path = "/api/portfolio/{section}",
    tag = "portfolio",
    params(
        ("section" = String, Path, description = "about, contact, education, experience, skills, projects, certifications or achievements")
    ),
    responses(
        (
            status = 200,
            description = "Section content",
            body = inline(SuccessResponse<SectionResponse>),
            example = json!({
                "success": true,
                "data": {
                    "content": {
                        "name": "Jane Doe",
                        "title": "Backend Engineer",
                        "bio": "Writes services in Rust.",
                        "location": "Lisbon",
                        "avatar_url": null,
                        "resume_url": null
                    },
                    "source": "database"
                }
            })
        ),
        (
            status = 404,
            description = "Unknown section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SECTION_NOT_FOUND",
                    "message": "unknown section: blog"
                }
            })
        ),
    )
)]
#[get("/api/portfolio/{section}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = match path.into_inner().parse::<SectionKey>() {
        Ok(key) => key,
        Err(e) => return ApiResponse::not_found("SECTION_NOT_FOUND", &e.to_string()),
    };

    let sections = &data.portfolio.sections;
    match key {
        SectionKey::About => view(&sections.about).await,
        SectionKey::Contact => view(&sections.contact).await,
        SectionKey::Education => view(&sections.education).await,
        SectionKey::Experience => view(&sections.experience).await,
        SectionKey::Skills => view(&sections.skills).await,
        SectionKey::Projects => view(&sections.projects).await,
        SectionKey::Certifications => view(&sections.certifications).await,
        SectionKey::Achievements => view(&sections.achievements).await,
    }
}
