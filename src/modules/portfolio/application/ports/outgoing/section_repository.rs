// src/modules/portfolio/application/ports/outgoing/section_repository.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, Educations, Experiences, Projects, Section,
    SkillsSection,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The database could not be reached at all (connect/acquire failures).
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Database-side storage of one content section.
#[async_trait]
pub trait SectionRepository<S: Section>: Send + Sync {
    /// `Ok(None)` when nothing has ever been stored for the section.
    async fn fetch(&self) -> Result<Option<S>, RepositoryError>;

    /// Deletes the stored section and inserts `content` in its place.
    async fn replace(&self, content: &S) -> Result<(), RepositoryError>;
}

/// A store holding every section, as the Postgres adapter does.
pub trait PortfolioRepository:
    SectionRepository<About>
    + SectionRepository<Contact>
    + SectionRepository<Educations>
    + SectionRepository<Experiences>
    + SectionRepository<SkillsSection>
    + SectionRepository<Projects>
    + SectionRepository<Certifications>
    + SectionRepository<Achievements>
{
}

impl<T> PortfolioRepository for T where
    T: SectionRepository<About>
        + SectionRepository<Contact>
        + SectionRepository<Educations>
        + SectionRepository<Experiences>
        + SectionRepository<SkillsSection>
        + SectionRepository<Projects>
        + SectionRepository<Certifications>
        + SectionRepository<Achievements>
{
}
