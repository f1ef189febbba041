pub mod fallback_store;
pub mod section_repository;

pub use fallback_store::{FallbackStore, FallbackStoreError};
pub use section_repository::{PortfolioRepository, RepositoryError, SectionRepository};
