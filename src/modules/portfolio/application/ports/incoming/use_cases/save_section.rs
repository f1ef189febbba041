use async_trait::async_trait;
use serde::Serialize;

use crate::modules::portfolio::domain::{ContentSource, Section, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveSectionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Neither the database nor the fallback store accepted the write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome<S> {
    pub content: S,
    /// `database` or `fallback`
    pub stored_in: ContentSource,
    /// Names removed because they repeated an earlier entry
    pub dropped_duplicates: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveSectionUseCase<S: Section>: Send + Sync {
    async fn execute(&self, draft: S::Draft) -> Result<SaveOutcome<S>, SaveSectionError>;
}
