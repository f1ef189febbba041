use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, ContentSource, Educations, Experiences,
    Projects, SectionKey, SkillsSection,
};

/// Every section at once, as the public site renders it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioOverview {
    pub about: About,
    pub contact: Contact,
    pub education: Educations,
    pub experience: Experiences,
    pub skills: SkillsSection,
    pub projects: Projects,
    pub certifications: Certifications,
    pub achievements: Achievements,
    /// Where each section was read from
    #[schema(value_type = Object)]
    pub sources: BTreeMap<SectionKey, ContentSource>,
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioOverview;
}
