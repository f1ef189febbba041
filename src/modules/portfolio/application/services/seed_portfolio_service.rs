use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SeedPortfolioError, SeedPortfolioUseCase, SeedReport,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, RepositoryError, SectionRepository,
};
use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, Educations, Experiences, Projects, Section,
    SkillsSection,
};

pub struct SeedPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> SeedPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Writes the defaults when the stored section is missing or empty.
/// Returns whether it did.
async fn seed_if_empty<S, R>(repository: &R) -> Result<bool, RepositoryError>
where
    S: Section,
    R: SectionRepository<S>,
{
    let has_content = repository
        .fetch()
        .await?
        .map(Section::normalize)
        .is_some_and(|content| !content.is_empty());

    if has_content {
        return Ok(false);
    }

    repository.replace(&S::defaults()).await?;
    Ok(true)
}

impl From<RepositoryError> for SeedPortfolioError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Unavailable(msg) => SeedPortfolioError::Unavailable(msg),
            other => SeedPortfolioError::RepositoryError(other.to_string()),
        }
    }
}

impl SeedReport {
    fn record<S: Section>(&mut self, seeded: bool) {
        if seeded {
            self.seeded.push(S::KEY);
        } else {
            self.skipped.push(S::KEY);
        }
    }
}

#[async_trait]
impl<R> SeedPortfolioUseCase for SeedPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SeedReport, SeedPortfolioError> {
        let repo = &self.repository;
        let mut report = SeedReport::default();

        report.record::<About>(seed_if_empty::<About, R>(repo).await?);
        report.record::<Contact>(seed_if_empty::<Contact, R>(repo).await?);
        report.record::<Educations>(seed_if_empty::<Educations, R>(repo).await?);
        report.record::<Experiences>(seed_if_empty::<Experiences, R>(repo).await?);
        report.record::<SkillsSection>(seed_if_empty::<SkillsSection, R>(repo).await?);
        report.record::<Projects>(seed_if_empty::<Projects, R>(repo).await?);
        report.record::<Certifications>(seed_if_empty::<Certifications, R>(repo).await?);
        report.record::<Achievements>(seed_if_empty::<Achievements, R>(repo).await?);

        info!(seeded = ?report.seeded, skipped = ?report.skipped, "Portfolio seeding finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::portfolio::domain::SectionKey;
    use crate::tests::support::portfolio_fixtures::{sample_about, InMemoryPortfolioRepository};

    #[tokio::test]
    async fn test_seeds_only_empty_sections() {
        let repo = InMemoryPortfolioRepository::default();
        repo.about.put(sample_about());
        repo.projects.put(Projects::default());

        let report = SeedPortfolioService::new(repo.clone()).execute().await.unwrap();

        assert_eq!(report.skipped, vec![SectionKey::About]);
        assert_eq!(report.seeded.len(), 7);
        assert!(report.seeded.contains(&SectionKey::Projects));
        assert_eq!(repo.about.replaced().len(), 0);
        assert_eq!(repo.skills.replaced(), vec![SkillsSection::defaults()]);
    }

    #[tokio::test]
    async fn test_second_run_seeds_nothing() {
        let repo = InMemoryPortfolioRepository::default();
        let service = SeedPortfolioService::new(repo.clone());

        service.execute().await.unwrap();
        let report = service.execute().await.unwrap();

        assert!(report.seeded.is_empty());
        assert_eq!(report.skipped.len(), SectionKey::ALL.len());
    }

    #[tokio::test]
    async fn test_unreachable_database_aborts_seeding() {
        let repo = InMemoryPortfolioRepository::default();
        repo.contact
            .fail_with(RepositoryError::Unavailable("connection refused".to_string()));

        let err = SeedPortfolioService::new(repo).execute().await.unwrap_err();

        assert!(matches!(err, SeedPortfolioError::Unavailable(_)));
    }
}
