use crate::api::schemas::{ErrorDetail, ErrorResponse, SaveResponse, SectionResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    NewCustomCategory, NewTechnicalSkill, PortfolioOverview, SeedReport,
};
use crate::modules::portfolio::domain::{
    About, Achievement, Certification, Contact, ContentSource, CustomCategory, EducationItem,
    ExperienceItem, ProjectItem, SectionKey, SkillCategory, SkillsSection, SoftSkill,
    TechnicalSkill,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content and the admin endpoints that edit it",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_section_handler,

        // Admin
        crate::modules::admin::adapter::incoming::web::routes::login_admin_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::save_section_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_technical_skill_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_custom_category_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_custom_category_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::seed_portfolio_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            SectionResponse,
            SaveResponse,

            // Content
            SectionKey,
            ContentSource,
            PortfolioOverview,
            About,
            Contact,
            EducationItem,
            ExperienceItem,
            SkillsSection,
            SkillCategory,
            TechnicalSkill,
            SoftSkill,
            CustomCategory,
            ProjectItem,
            Certification,
            Achievement,

            // Admin DTOs
            LoginRequestDto,
            LoginResponse,
            NewTechnicalSkill,
            NewCustomCategory,
            SeedReport
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Public portfolio content"),
        (name = "admin", description = "Admin login and content editing"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
