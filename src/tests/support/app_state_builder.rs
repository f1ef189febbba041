use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::application::use_cases::login_admin::{ILoginAdminUseCase, LoginError};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, SeedPortfolioUseCase, SeedReport,
};
use crate::modules::portfolio::application::{PortfolioUseCases, SectionCatalog};
use crate::tests::support::portfolio_fixtures::stub_section_catalog;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let skills = Arc::new(StubSkillCatalogUseCase::default());

        Self {
            portfolio: PortfolioUseCases {
                sections: stub_section_catalog(),
                overview: Arc::new(StubGetPortfolioUseCase),
                add_technical_skill: skills.clone(),
                add_custom_category: skills.clone(),
                remove_custom_category: skills,
                seed: Arc::new(StubSeedPortfolioUseCase::success(SeedReport::default())),
            },
            login_admin: Arc::new(StubLoginAdminUseCase::error(LoginError::InvalidCredentials)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_sections(mut self, sections: SectionCatalog) -> Self {
        self.portfolio.sections = sections;
        self
    }

    pub fn with_overview(mut self, uc: impl GetPortfolioUseCase + 'static) -> Self {
        self.portfolio.overview = Arc::new(uc);
        self
    }

    /// Backs the add-skill, add-category and remove-category actions.
    pub fn with_skill_catalog(mut self, uc: StubSkillCatalogUseCase) -> Self {
        let uc = Arc::new(uc);
        self.portfolio.add_technical_skill = uc.clone();
        self.portfolio.add_custom_category = uc.clone();
        self.portfolio.remove_custom_category = uc;
        self
    }

    pub fn with_seed(mut self, uc: impl SeedPortfolioUseCase + 'static) -> Self {
        self.portfolio.seed = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            login_admin_use_case: self.login_admin,
        })
    }
}
