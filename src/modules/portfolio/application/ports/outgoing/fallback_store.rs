// src/modules/portfolio/application/ports/outgoing/fallback_store.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::SectionKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackStoreError {
    #[error("Fallback store I/O error: {0}")]
    Io(String),

    #[error("Fallback store is corrupt: {0}")]
    Corrupt(String),
}

/// Local copy of the portfolio used while the database is away.
///
/// Content is exchanged as raw JSON so a corrupt entry for one section
/// doesn't make the others unreadable.
#[async_trait]
pub trait FallbackStore: Send + Sync {
    async fn read(&self, key: SectionKey) -> Result<Option<serde_json::Value>, FallbackStoreError>;

    async fn write(
        &self,
        key: SectionKey,
        content: serde_json::Value,
    ) -> Result<(), FallbackStoreError>;
}
