pub(crate) mod fallback_mirror;
pub mod get_portfolio_service;
pub mod get_section_service;
pub mod save_section_service;
pub mod seed_portfolio_service;
pub mod skill_catalog_service;

pub use get_portfolio_service::GetPortfolioService;
pub use get_section_service::GetSectionService;
pub use save_section_service::SaveSectionService;
pub use seed_portfolio_service::SeedPortfolioService;
pub use skill_catalog_service::SkillCatalogService;
