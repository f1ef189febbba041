use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::section::Section;

/// Which store a served section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Database,
    Fallback,
    Defaults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView<S> {
    pub content: S,
    pub source: ContentSource,
}

impl<S: Section> SectionView<S> {
    pub fn defaults() -> Self {
        Self {
            content: S::defaults(),
            source: ContentSource::Defaults,
        }
    }
}

/// Picks what to serve: normalized database content, then normalized
/// fallback content, then the built-in defaults. Empty content never wins.
pub fn reconcile<S: Section>(primary: Option<S>, fallback: Option<S>) -> SectionView<S> {
    let candidates = [
        (primary, ContentSource::Database),
        (fallback, ContentSource::Fallback),
    ];

    for (content, source) in candidates {
        if let Some(content) = content.map(Section::normalize).filter(|c| !c.is_empty()) {
            return SectionView { content, source };
        }
    }

    SectionView::defaults()
}
