mod json_file_fallback_store;
mod portfolio_repository_postgres;
pub mod sea_orm_entity;

pub use json_file_fallback_store::{JsonFileFallbackStore, STORAGE_KEY};
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
