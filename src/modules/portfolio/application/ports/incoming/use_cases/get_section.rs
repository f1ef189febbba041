use async_trait::async_trait;

use crate::modules::portfolio::domain::{Section, SectionView};

/// Read path for one section. Never fails: when neither the database nor the
/// fallback store has content the built-in defaults are served.
#[async_trait]
pub trait GetSectionUseCase<S: Section>: Send + Sync {
    async fn execute(&self) -> SectionView<S>;
}
