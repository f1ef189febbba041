use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SaveOutcome, SaveSectionError,
};
use crate::modules::portfolio::domain::normalize::{default_level, deserialize_level};
use crate::modules::portfolio::domain::SkillsSection;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillCatalogError {
    #[error("{field} is required")]
    MissingName { field: &'static str },

    #[error("skill '{0}' already exists")]
    SkillAlreadyExists(String),

    #[error("category '{0}' already exists")]
    CategoryAlreadyExists(String),

    #[error("category not found")]
    CategoryNotFound,

    #[error(transparent)]
    Save(#[from] SaveSectionError),
}

//
// ──────────────────────────────────────────────────────────
// Requests
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTechnicalSkill {
    #[schema(example = "Kubernetes")]
    pub name: String,
    /// 0 to 100, defaults to 50
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    #[schema(example = 70)]
    pub level: u8,
    /// Predefined category label or the name of a custom category
    #[serde(default)]
    #[schema(example = "devops")]
    pub category: Option<String>,
    #[serde(default)]
    pub custom_category_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCustomCategory {
    #[schema(example = "Cloud")]
    pub name: String,
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddTechnicalSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill: NewTechnicalSkill,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError>;
}

#[async_trait]
pub trait AddCustomCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        category: NewCustomCategory,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError>;
}

#[async_trait]
pub trait RemoveCustomCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError>;
}
