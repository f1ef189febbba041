pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::portfolio;

use crate::admin::adapter::outgoing::jwt::JwtTokenService;
use crate::admin::adapter::outgoing::security::Argon2Hasher;
use crate::admin::application::ports::outgoing::TokenProvider;
use crate::admin::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::portfolio::adapter::outgoing::{JsonFileFallbackStore, PortfolioRepositoryPostgres};
use crate::portfolio::application::ports::incoming::use_cases::SeedPortfolioUseCase;
use crate::portfolio::application::ports::outgoing::{FallbackStore, SectionRepository};
use crate::portfolio::application::services::{
    GetPortfolioService, GetSectionService, SaveSectionService, SeedPortfolioService,
    SkillCatalogService,
};
use crate::portfolio::application::{PortfolioUseCases, SectionCatalog, SectionUseCases};
use crate::portfolio::domain::Section;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

/// Read and write paths for one section over the shared stores.
fn section_use_cases<S: Section>(
    repo: &PortfolioRepositoryPostgres,
    fallback: &Arc<dyn FallbackStore + Send + Sync>,
) -> SectionUseCases<S>
where
    PortfolioRepositoryPostgres: SectionRepository<S>,
{
    SectionUseCases {
        get: Arc::new(GetSectionService::new(repo.clone(), Arc::clone(fallback))),
        save: Arc::new(SaveSectionService::new(repo.clone(), Arc::clone(fallback))),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let server_url = config.server_url();

    // Database connection. Lazy so the server still comes up (serving the
    // fallback store) while Postgres is down.
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(true)
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Invalid database options");
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    if let Err(e) = Migrator::up(&conn, None).await {
        warn!(error = %e, "Migrations not applied, serving from fallback until the database is back");
    }

    let db_arc = Arc::new(conn);

    // Portfolio
    let repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let fallback: Arc<dyn FallbackStore + Send + Sync> =
        Arc::new(JsonFileFallbackStore::new(config.fallback_path.clone()));
    info!(path = %config.fallback_path.display(), "Fallback store ready");

    let sections = SectionCatalog {
        about: section_use_cases(&repo, &fallback),
        contact: section_use_cases(&repo, &fallback),
        education: section_use_cases(&repo, &fallback),
        experience: section_use_cases(&repo, &fallback),
        skills: section_use_cases(&repo, &fallback),
        projects: section_use_cases(&repo, &fallback),
        certifications: section_use_cases(&repo, &fallback),
        achievements: section_use_cases(&repo, &fallback),
    };

    let skill_catalog = Arc::new(SkillCatalogService::new(sections.skills.clone()));
    let seed_use_case = Arc::new(SeedPortfolioService::new(repo));

    if config.seed_on_start {
        match seed_use_case.execute().await {
            Ok(report) => info!(seeded = ?report.seeded, "Seeded empty sections"),
            Err(e) => warn!(error = %e, "Startup seeding skipped"),
        }
    }

    let portfolio = PortfolioUseCases {
        overview: Arc::new(GetPortfolioService::new(sections.clone())),
        sections,
        add_technical_skill: skill_catalog.clone(),
        add_custom_category: skill_catalog.clone(),
        remove_custom_category: skill_catalog,
        seed: seed_use_case,
    };

    // Admin
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let login_admin_use_case = LoginAdminUseCase::new(
        config.admin.clone(),
        Arc::new(Argon2Hasher::new()),
        Arc::new(jwt_service.clone()),
    );

    let state = AppState {
        portfolio,
        login_admin_use_case: Arc::new(login_admin_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_section_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_technical_skill_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_custom_category_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::remove_custom_category_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::seed_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::save_section_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
