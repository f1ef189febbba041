use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::domain::SectionKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedPortfolioError {
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeedReport {
    /// Sections that were empty and received the default content
    pub seeded: Vec<SectionKey>,
    /// Sections left alone because they already had content
    pub skipped: Vec<SectionKey>,
}

#[async_trait]
pub trait SeedPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedReport, SeedPortfolioError>;
}
