// src/modules/portfolio/application/services/skill_catalog_service.rs

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddCustomCategoryUseCase, AddTechnicalSkillUseCase, NewCustomCategory, NewTechnicalSkill,
    RemoveCustomCategoryUseCase, SaveOutcome, SkillCatalogError,
};
use crate::modules::portfolio::application::SectionUseCases;
use crate::modules::portfolio::domain::normalize::text;
use crate::modules::portfolio::domain::sections::{
    CustomCategoryDraft, SkillsDraft, TechnicalSkillDraft,
};
use crate::modules::portfolio::domain::SkillsSection;

/// The admin "Add"/"Remove" actions of the skills editor. Each one loads the
/// section through the read path, edits it and saves it back whole.
#[derive(Clone)]
pub struct SkillCatalogService {
    skills: SectionUseCases<SkillsSection>,
}

impl SkillCatalogService {
    pub fn new(skills: SectionUseCases<SkillsSection>) -> Self {
        Self { skills }
    }

    async fn current(&self) -> SkillsSection {
        self.skills.get.execute().await.content
    }

    async fn save(
        &self,
        draft: SkillsDraft,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        Ok(self.skills.save.execute(draft).await?)
    }
}

#[async_trait]
impl AddTechnicalSkillUseCase for SkillCatalogService {
    async fn execute(
        &self,
        skill: NewTechnicalSkill,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        let name = text(&skill.name);
        if name.is_empty() {
            return Err(SkillCatalogError::MissingName { field: "name" });
        }

        let current = self.current().await;
        if current.has_technical_skill(&name) {
            return Err(SkillCatalogError::SkillAlreadyExists(name));
        }

        let mut draft = SkillsDraft::from(current);
        draft.technical.push(TechnicalSkillDraft {
            id: None,
            name: name.clone(),
            level: skill.level,
            category: skill.category,
            custom_category_id: skill.custom_category_id,
        });

        let outcome = self.save(draft).await?;
        info!(skill = %name, stored_in = ?outcome.stored_in, "Technical skill added");
        Ok(outcome)
    }
}

#[async_trait]
impl AddCustomCategoryUseCase for SkillCatalogService {
    async fn execute(
        &self,
        category: NewCustomCategory,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        let name = text(&category.name);
        if name.is_empty() {
            return Err(SkillCatalogError::MissingName { field: "name" });
        }

        let current = self.current().await;
        if current.has_category_named(&name) {
            return Err(SkillCatalogError::CategoryAlreadyExists(name));
        }

        let mut draft = SkillsDraft::from(current);
        draft.custom_categories.push(CustomCategoryDraft {
            id: None,
            name: name.clone(),
        });

        let outcome = self.save(draft).await?;
        info!(category = %name, stored_in = ?outcome.stored_in, "Custom category added");
        Ok(outcome)
    }
}

#[async_trait]
impl RemoveCustomCategoryUseCase for SkillCatalogService {
    async fn execute(&self, id: Uuid) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        let mut current = self.current().await;
        if !current.remove_custom_category(id) {
            return Err(SkillCatalogError::CategoryNotFound);
        }

        let outcome = self.save(SkillsDraft::from(current)).await?;
        info!(category_id = %id, "Custom category removed");
        Ok(outcome)
    }
}
