pub mod get_portfolio;
pub mod get_section;
pub mod manage_skills;
pub mod save_section;
pub mod seed_portfolio;

pub use get_portfolio::{GetPortfolioUseCase, PortfolioOverview};
pub use get_section::GetSectionUseCase;
pub use manage_skills::{
    AddCustomCategoryUseCase, AddTechnicalSkillUseCase, NewCustomCategory, NewTechnicalSkill,
    RemoveCustomCategoryUseCase, SkillCatalogError,
};
pub use save_section::{SaveOutcome, SaveSectionError, SaveSectionUseCase};
pub use seed_portfolio::{SeedPortfolioError, SeedPortfolioUseCase, SeedReport};
