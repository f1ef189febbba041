use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddCustomCategoryUseCase, AddTechnicalSkillUseCase, GetPortfolioUseCase, GetSectionUseCase,
    RemoveCustomCategoryUseCase, SaveSectionUseCase, SeedPortfolioUseCase,
};
use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, Educations, Experiences, Projects, Section,
    SkillsSection,
};

#[derive(Clone)]
pub struct SectionUseCases<S: Section> {
    pub get: Arc<dyn GetSectionUseCase<S> + Send + Sync>,
    pub save: Arc<dyn SaveSectionUseCase<S> + Send + Sync>,
}

#[derive(Clone)]
pub struct SectionCatalog {
    pub about: SectionUseCases<About>,
    pub contact: SectionUseCases<Contact>,
    pub education: SectionUseCases<Educations>,
    pub experience: SectionUseCases<Experiences>,
    pub skills: SectionUseCases<SkillsSection>,
    pub projects: SectionUseCases<Projects>,
    pub certifications: SectionUseCases<Certifications>,
    pub achievements: SectionUseCases<Achievements>,
}

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub sections: SectionCatalog,
    pub overview: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub add_technical_skill: Arc<dyn AddTechnicalSkillUseCase + Send + Sync>,
    pub add_custom_category: Arc<dyn AddCustomCategoryUseCase + Send + Sync>,
    pub remove_custom_category: Arc<dyn RemoveCustomCategoryUseCase + Send + Sync>,
    pub seed: Arc<dyn SeedPortfolioUseCase + Send + Sync>,
}
