use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SaveOutcome, SaveSectionError, SaveSectionUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    FallbackStore, RepositoryError, SectionRepository,
};
use crate::modules::portfolio::application::services::fallback_mirror;
use crate::modules::portfolio::domain::{ContentSource, Normalized, Section};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SaveSectionService<S, R>
where
    S: Section,
    R: SectionRepository<S>,
{
    repository: R,
    fallback: Arc<dyn FallbackStore + Send + Sync>,
    _section: PhantomData<fn() -> S>,
}

impl<S, R> SaveSectionService<S, R>
where
    S: Section,
    R: SectionRepository<S>,
{
    pub fn new(repository: R, fallback: Arc<dyn FallbackStore + Send + Sync>) -> Self {
        Self {
            repository,
            fallback,
            _section: PhantomData,
        }
    }
}

#[async_trait]
impl<S, R> SaveSectionUseCase<S> for SaveSectionService<S, R>
where
    S: Section,
    R: SectionRepository<S> + Send + Sync,
{
    async fn execute(&self, draft: S::Draft) -> Result<SaveOutcome<S>, SaveSectionError> {
        let Normalized {
            content,
            dropped_duplicates,
        } = S::from_draft(draft)?;

        if !dropped_duplicates.is_empty() {
            info!(section = %S::KEY, dropped = ?dropped_duplicates, "Removed duplicate names before save");
        }

        let stored_in = match self.repository.replace(&content).await {
            Ok(()) => {
                fallback_mirror::mirror(self.fallback.as_ref(), &content).await;
                ContentSource::Database
            }

            Err(RepositoryError::Unavailable(msg)) => {
                warn!(section = %S::KEY, error = %msg, "Database unavailable, saving to fallback store");
                fallback_mirror::write(self.fallback.as_ref(), &content)
                    .await
                    .map_err(|e| {
                        error!(section = %S::KEY, error = %e, "Fallback store write failed");
                        SaveSectionError::StorageUnavailable(e.to_string())
                    })?;
                ContentSource::Fallback
            }

            Err(e) => {
                error!(section = %S::KEY, error = %e, "Failed to save section");
                return Err(SaveSectionError::RepositoryError(e.to_string()));
            }
        };

        Ok(SaveOutcome {
            content,
            stored_in,
            dropped_duplicates,
        })
    }
}
