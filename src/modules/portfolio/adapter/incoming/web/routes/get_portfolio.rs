use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::PortfolioOverview;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Whole portfolio
///
/// Every section in one response, each read the same way as
/// `GET /api/portfolio/{section}`. `sources` maps section names to the store
/// that answered.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "All sections",
            body = inline(SuccessResponse<PortfolioOverview>),
        ),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.overview.execute().await)
}
