use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetSectionUseCase;
use crate::modules::portfolio::application::ports::outgoing::{FallbackStore, SectionRepository};
use crate::modules::portfolio::application::services::fallback_mirror;
use crate::modules::portfolio::domain::{reconcile, ContentSource, Section, SectionView};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetSectionService<S, R>
where
    S: Section,
    R: SectionRepository<S>,
{
    repository: R,
    fallback: Arc<dyn FallbackStore + Send + Sync>,
    _section: PhantomData<fn() -> S>,
}

impl<S, R> GetSectionService<S, R>
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
impl<S, R> GetSectionUseCase<S> for GetSectionService<S, R>
where
    S: Section,
    R: SectionRepository<S> + Send + Sync,
{
    async fn execute(&self) -> SectionView<S> {
        let stored = match self.repository.fetch().await {
            Ok(stored) => stored.map(Section::normalize),
            Err(e) => {
                warn!(section = %S::KEY, error = %e, "Database read failed, using fallback store");
                None
            }
        };

        let local = match &stored {
            Some(content) if !content.is_empty() => None,
            _ => fallback_mirror::read::<S>(self.fallback.as_ref()).await,
        };

        let view = reconcile(stored, local);
        match view.source {
            ContentSource::Database => {
                fallback_mirror::mirror(self.fallback.as_ref(), &view.content).await
            }
            ContentSource::Fallback => {
                warn!(section = %S::KEY, "Serving section from fallback store")
            }
            ContentSource::Defaults => {}
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::portfolio::application::ports::outgoing::{
        FallbackStoreError, RepositoryError,
    };
    use crate::modules::portfolio::domain::{About, SectionKey};
    use crate::tests::support::portfolio_fixtures::{
        sample_about, MockFallbackStore, StubSectionRepository,
    };

    fn service(
        repo: StubSectionRepository<About>,
        store: MockFallbackStore,
    ) -> GetSectionService<About, StubSectionRepository<About>> {
        GetSectionService::new(repo, Arc::new(store))
    }

    // =====================================================
    // Database
    // =====================================================

    #[tokio::test]
    async fn test_database_content_is_served_and_mirrored() {
        let mut store = MockFallbackStore::new();
        store.expect_read().never();
        store
            .expect_write()
            .withf(|key, value| *key == SectionKey::About && value["name"] == "Jane Doe")
            .times(1)
            .returning(|_, _| Ok(()));

        let view = service(StubSectionRepository::holding(sample_about()), store)
            .execute()
            .await;

        assert_eq!(view.source, ContentSource::Database);
        assert_eq!(view.content.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_mirror_failure_does_not_affect_read() {
        let mut store = MockFallbackStore::new();
        store
            .expect_write()
            .returning(|_, _| Err(FallbackStoreError::Io("disk full".to_string())));

        let view = service(StubSectionRepository::holding(sample_about()), store)
            .execute()
            .await;

        assert_eq!(view.source, ContentSource::Database);
    }

    // =====================================================
    // Fallback
    // =====================================================

    #[tokio::test]
    async fn test_unreachable_database_reads_fallback() {
        let mut store = MockFallbackStore::new();
        store
            .expect_read()
            .times(1)
            .returning(|_| Ok(Some(json!({ "name": "Local Jane", "title": "", "bio": "" }))));
        store.expect_write().never();

        let repo = StubSectionRepository::failing(RepositoryError::Unavailable(
            "connection refused".to_string(),
        ));
        let view = service(repo, store).execute().await;

        assert_eq!(view.source, ContentSource::Fallback);
        assert_eq!(view.content.name, "Local Jane");
    }

    #[tokio::test]
    async fn test_empty_database_reads_fallback() {
        let mut store = MockFallbackStore::new();
        store
            .expect_read()
            .returning(|_| Ok(Some(json!({ "name": "Local Jane", "title": "", "bio": "" }))));

        let view = service(StubSectionRepository::holding(About::default()), store)
            .execute()
            .await;

        assert_eq!(view.source, ContentSource::Fallback);
    }

    // =====================================================
    // Defaults
    // =====================================================

    #[tokio::test]
    async fn test_corrupt_fallback_serves_defaults() {
        let mut store = MockFallbackStore::new();
        store
            .expect_read()
            .returning(|_| Ok(Some(json!(["not", "an", "object"]))));

        let view = service(StubSectionRepository::empty(), store).execute().await;

        assert_eq!(view.source, ContentSource::Defaults);
        assert_eq!(view.content, About::defaults());
    }

    #[tokio::test]
    async fn test_everything_failing_still_serves_defaults() {
        let mut store = MockFallbackStore::new();
        store
            .expect_read()
            .returning(|_| Err(FallbackStoreError::Io("permission denied".to_string())));

        let repo = StubSectionRepository::failing(RepositoryError::DatabaseError(
            "relation does not exist".to_string(),
        ));
        let view = service(repo, store).execute().await;

        assert_eq!(view.source, ContentSource::Defaults);
    }
}
