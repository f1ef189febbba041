use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::modules::portfolio::application::ports::outgoing::{
    FallbackStore, FallbackStoreError, RepositoryError, SectionRepository,
};
use crate::modules::portfolio::application::{SectionCatalog, SectionUseCases};
use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, ContentSource, Educations, Experiences,
    Projects, Section, SectionKey, SkillsSection,
};
use crate::tests::support::stubs::{RecordingSaveSectionUseCase, StubGetSectionUseCase};

mock! {
    pub FallbackStore {}
    #[async_trait]
    impl FallbackStore for FallbackStore {
        async fn read(&self, key: SectionKey) -> Result<Option<serde_json::Value>, FallbackStoreError>;
        async fn write(&self, key: SectionKey, content: serde_json::Value) -> Result<(), FallbackStoreError>;
    }
}

pub fn sample_about() -> About {
    About {
        name: "Jane Doe".to_string(),
        title: "Backend Engineer".to_string(),
        bio: "Writes services in Rust.".to_string(),
        location: Some("Lisbon".to_string()),
        avatar_url: None,
        resume_url: Some("https://example.com/jane.pdf".to_string()),
    }
}

// =====================================================
// Section repository double
// =====================================================

struct RepoState<S> {
    stored: Option<S>,
    failure: Option<RepositoryError>,
    replaced: Vec<S>,
}

/// One section's worth of storage. Clones share state so a test can keep a
/// handle after moving the repository into a service.
#[derive(Clone)]
pub struct StubSectionRepository<S> {
    state: Arc<Mutex<RepoState<S>>>,
}

impl<S: Section> Default for StubSectionRepository<S> {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(RepoState {
                stored: None,
                failure: None,
                replaced: Vec::new(),
            })),
        }
    }
}

impl<S: Section> StubSectionRepository<S> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holding(content: S) -> Self {
        let repo = Self::default();
        repo.put(content);
        repo
    }

    pub fn failing(error: RepositoryError) -> Self {
        let repo = Self::default();
        repo.fail_with(error);
        repo
    }

    pub fn put(&self, content: S) {
        self.state.lock().unwrap().stored = Some(content);
    }

    pub fn fail_with(&self, error: RepositoryError) {
        self.state.lock().unwrap().failure = Some(error);
    }

    /// Every successful `replace`, oldest first.
    pub fn replaced(&self) -> Vec<S> {
        self.state.lock().unwrap().replaced.clone()
    }
}

#[async_trait]
impl<S: Section> SectionRepository<S> for StubSectionRepository<S> {
    async fn fetch(&self) -> Result<Option<S>, RepositoryError> {
        let state = self.state.lock().unwrap();
        match &state.failure {
            Some(e) => Err(e.clone()),
            None => Ok(state.stored.clone()),
        }
    }

    async fn replace(&self, content: &S) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(e) = &state.failure {
            return Err(e.clone());
        }
        state.stored = Some(content.clone());
        state.replaced.push(content.clone());
        Ok(())
    }
}

// =====================================================
// Whole-portfolio repository double
// =====================================================

#[derive(Clone, Default)]
pub struct InMemoryPortfolioRepository {
    pub about: StubSectionRepository<About>,
    pub contact: StubSectionRepository<Contact>,
    pub education: StubSectionRepository<Educations>,
    pub experience: StubSectionRepository<Experiences>,
    pub skills: StubSectionRepository<SkillsSection>,
    pub projects: StubSectionRepository<Projects>,
    pub certifications: StubSectionRepository<Certifications>,
    pub achievements: StubSectionRepository<Achievements>,
}

macro_rules! delegate_section {
    ($section:ty, $field:ident) => {
        #[async_trait]
        impl SectionRepository<$section> for InMemoryPortfolioRepository {
            async fn fetch(&self) -> Result<Option<$section>, RepositoryError> {
                self.$field.fetch().await
            }

            async fn replace(&self, content: &$section) -> Result<(), RepositoryError> {
                self.$field.replace(content).await
            }
        }
    };
}

delegate_section!(About, about);
delegate_section!(Contact, contact);
delegate_section!(Educations, education);
delegate_section!(Experiences, experience);
delegate_section!(SkillsSection, skills);
delegate_section!(Projects, projects);
delegate_section!(Certifications, certifications);
delegate_section!(Achievements, achievements);

// =====================================================
// Use case catalog
// =====================================================

/// Reads serve the defaults, saves succeed against the database.
pub fn stub_section_use_cases<S: Section>() -> SectionUseCases<S> {
    SectionUseCases {
        get: Arc::new(StubGetSectionUseCase::<S>::from_defaults()),
        save: Arc::new(RecordingSaveSectionUseCase::<S>::stored_in(
            ContentSource::Database,
        )),
    }
}

pub fn stub_section_catalog() -> SectionCatalog {
    SectionCatalog {
        about: stub_section_use_cases(),
        contact: stub_section_use_cases(),
        education: stub_section_use_cases(),
        experience: stub_section_use_cases(),
        skills: stub_section_use_cases(),
        projects: stub_section_use_cases(),
        certifications: stub_section_use_cases(),
        achievements: stub_section_use_cases(),
    }
}

/// Like [`stub_section_catalog`] but `about` comes from the database.
pub fn section_catalog_with_about(about: About) -> SectionCatalog {
    SectionCatalog {
        about: SectionUseCases {
            get: Arc::new(StubGetSectionUseCase::from_database(about)),
            save: Arc::new(RecordingSaveSectionUseCase::<About>::stored_in(
                ContentSource::Database,
            )),
        },
        ..stub_section_catalog()
    }
}
