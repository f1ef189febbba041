use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::application::use_cases::login_admin::{
    AdminSessionToken, ILoginAdminUseCase, LoginError, LoginRequest,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddCustomCategoryUseCase, AddTechnicalSkillUseCase, GetPortfolioUseCase, GetSectionUseCase,
    NewCustomCategory, NewTechnicalSkill, PortfolioOverview, RemoveCustomCategoryUseCase,
    SaveOutcome, SaveSectionError, SaveSectionUseCase, SeedPortfolioError, SeedPortfolioUseCase,
    SeedReport, SkillCatalogError,
};
use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, ContentSource, Educations, Experiences,
    Projects, Section, SectionKey, SectionView, SkillsSection,
};

// =====================================================
// Sections
// =====================================================

pub struct StubGetSectionUseCase<S> {
    view: SectionView<S>,
}

impl<S: Section> StubGetSectionUseCase<S> {
    pub fn from_database(content: S) -> Self {
        Self {
            view: SectionView {
                content,
                source: ContentSource::Database,
            },
        }
    }

    pub fn from_fallback(content: S) -> Self {
        Self {
            view: SectionView {
                content,
                source: ContentSource::Fallback,
            },
        }
    }

    pub fn from_defaults() -> Self {
        Self {
            view: SectionView::defaults(),
        }
    }
}

#[async_trait]
impl<S: Section> GetSectionUseCase<S> for StubGetSectionUseCase<S> {
    async fn execute(&self) -> SectionView<S> {
        self.view.clone()
    }
}

/// Runs the real draft normalization, then pretends to store the result.
pub struct RecordingSaveSectionUseCase<S> {
    result: Result<ContentSource, SaveSectionError>,
    calls: AtomicUsize,
    _section: PhantomData<fn() -> S>,
}

impl<S: Section> RecordingSaveSectionUseCase<S> {
    pub fn stored_in(source: ContentSource) -> Self {
        Self {
            result: Ok(source),
            calls: AtomicUsize::new(0),
            _section: PhantomData,
        }
    }

    pub fn failing(error: SaveSectionError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
            _section: PhantomData,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: Section> SaveSectionUseCase<S> for RecordingSaveSectionUseCase<S> {
    async fn execute(&self, draft: S::Draft) -> Result<SaveOutcome<S>, SaveSectionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let normalized = S::from_draft(draft)?;
        let stored_in = self.result.clone()?;

        Ok(SaveOutcome {
            content: normalized.content,
            stored_in,
            dropped_duplicates: normalized.dropped_duplicates,
        })
    }
}

// =====================================================
// Overview
// =====================================================

pub struct StubGetPortfolioUseCase;

impl StubGetPortfolioUseCase {
    pub fn overview() -> PortfolioOverview {
        PortfolioOverview {
            about: About::defaults(),
            contact: Contact::defaults(),
            education: Educations::defaults(),
            experience: Experiences::defaults(),
            skills: SkillsSection::defaults(),
            projects: Projects::defaults(),
            certifications: Certifications::defaults(),
            achievements: Achievements::defaults(),
            sources: SectionKey::ALL
                .into_iter()
                .map(|key| (key, ContentSource::Defaults))
                .collect(),
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> PortfolioOverview {
        Self::overview()
    }
}

// =====================================================
// Skills catalog
// =====================================================

/// Answers every skills action with the same result.
pub struct StubSkillCatalogUseCase {
    result: Result<SaveOutcome<SkillsSection>, SkillCatalogError>,
}

impl StubSkillCatalogUseCase {
    pub fn saved(content: SkillsSection) -> Self {
        Self {
            result: Ok(SaveOutcome {
                content,
                stored_in: ContentSource::Database,
                dropped_duplicates: Vec::new(),
            }),
        }
    }

    pub fn error(error: SkillCatalogError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubSkillCatalogUseCase {
    fn default() -> Self {
        Self::saved(SkillsSection::defaults())
    }
}

#[async_trait]
impl AddTechnicalSkillUseCase for StubSkillCatalogUseCase {
    async fn execute(
        &self,
        _skill: NewTechnicalSkill,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        self.result.clone()
    }
}

#[async_trait]
impl AddCustomCategoryUseCase for StubSkillCatalogUseCase {
    async fn execute(
        &self,
        _category: NewCustomCategory,
    ) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        self.result.clone()
    }
}

#[async_trait]
impl RemoveCustomCategoryUseCase for StubSkillCatalogUseCase {
    async fn execute(&self, _id: Uuid) -> Result<SaveOutcome<SkillsSection>, SkillCatalogError> {
        self.result.clone()
    }
}

// =====================================================
// Seeding
// =====================================================

pub struct StubSeedPortfolioUseCase {
    result: Result<SeedReport, SeedPortfolioError>,
}

impl StubSeedPortfolioUseCase {
    pub fn success(report: SeedReport) -> Self {
        Self { result: Ok(report) }
    }

    pub fn error(error: SeedPortfolioError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl SeedPortfolioUseCase for StubSeedPortfolioUseCase {
    async fn execute(&self) -> Result<SeedReport, SeedPortfolioError> {
        self.result.clone()
    }
}

// =====================================================
// Admin
// =====================================================

pub struct StubLoginAdminUseCase {
    result: Result<AdminSessionToken, LoginError>,
}

impl StubLoginAdminUseCase {
    pub fn success(token: &str, expires_at: i64) -> Self {
        Self {
            result: Ok(AdminSessionToken {
                access_token: token.to_string(),
                expires_at,
            }),
        }
    }

    pub fn error(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AdminSessionToken, LoginError> {
        self.result.clone()
    }
}
