pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_profile_tables;
mod m20261019_000002_create_timeline_tables;
mod m20261019_000003_create_skill_tables;
mod m20261019_000004_create_project_tables;
mod m20261019_000005_create_recognition_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_profile_tables::Migration),
            Box::new(m20261019_000002_create_timeline_tables::Migration),
            Box::new(m20261019_000003_create_skill_tables::Migration),
            Box::new(m20261019_000004_create_project_tables::Migration),
            Box::new(m20261019_000005_create_recognition_tables::Migration),
        ]
    }
}
