use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    About,
    Contact,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

impl SectionKey {
    pub const ALL: [SectionKey; 8] = [
        SectionKey::About,
        SectionKey::Contact,
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Certifications,
        SectionKey::Achievements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::About => "about",
            SectionKey::Contact => "contact",
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
            SectionKey::Achievements => "achievements",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionKey {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Output of turning an admin payload into section content.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<S> {
    pub content: S,
    pub dropped_duplicates: Vec<String>,
}

impl<S> Normalized<S> {
    pub fn clean(content: S) -> Self {
        Self {
            content,
            dropped_duplicates: Vec::new(),
        }
    }
}

/// One independently stored record set of the portfolio.
pub trait Section:
    fmt::Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KEY: SectionKey;

    /// Loose shape the admin client sends on save.
    type Draft: fmt::Debug + DeserializeOwned + Send + Sync + 'static;

    /// Validates, trims, de-duplicates names and resolves placeholder ids.
    fn from_draft(draft: Self::Draft) -> Result<Normalized<Self>, ValidationError>;

    /// Re-applies shape and uniqueness rules to content read back from a
    /// store. Never fails; offending rows are repaired or removed.
    fn normalize(self) -> Self;

    fn is_empty(&self) -> bool;

    /// Built-in seed content.
    fn defaults() -> Self;
}
