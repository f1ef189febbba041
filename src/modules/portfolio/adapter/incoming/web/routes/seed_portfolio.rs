use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SeedPortfolioError, SeedReport,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Seed empty sections
///
/// Writes the built-in content into every section that has nothing in the
/// database. Sections with content are left alone.
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Seeding finished",
            body = inline(SuccessResponse<SeedReport>),
            example = json!({
                "success": true,
                "data": {
                    "seeded": ["skills", "certifications"],
                    "skipped": ["about", "contact", "education", "experience", "projects", "achievements"]
                }
            })
        ),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (
            status = 503,
            description = "Database unreachable",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DATABASE_UNAVAILABLE",
                    "message": "Database is unreachable, nothing was seeded"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/seed")]
pub async fn seed_portfolio_handler(
    admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.seed.execute().await {
        Ok(report) => {
            info!(admin = %admin.email, seeded = report.seeded.len(), "Portfolio seeded");
            ApiResponse::success(report)
        }

        Err(SeedPortfolioError::Unavailable(msg)) => {
            warn!(error = %msg, "Seeding skipped: database unavailable");
            ApiResponse::service_unavailable(
                "DATABASE_UNAVAILABLE",
                "Database is unreachable, nothing was seeded",
            )
        }

        Err(SeedPortfolioError::RepositoryError(msg)) => {
            error!(error = %msg, "Seeding failed");
            ApiResponse::internal_error()
        }
    }
}
